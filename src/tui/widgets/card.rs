use crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::config::{CardConfig, CardId, Variant};
use crate::harness::CardStatus;
use crate::tui::theme::Theme;

/// Event raised by a card towards its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardEvent {
    Activate(CardId),
}

/// A single card: title, body, badge, variant styling and interaction.
///
/// Holds no state of its own. `active` comes from the harness snapshot and
/// `focused` from the grid's transient focus.
pub struct CardComponent<'a> {
    config: &'a CardConfig,
    active: bool,
    focused: bool,
}

impl<'a> CardComponent<'a> {
    pub fn new(config: &'a CardConfig) -> Self {
        Self {
            config,
            active: false,
            focused: false,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Whether clicks and key presses raise [`CardEvent::Activate`].
    pub fn is_interactive(&self) -> bool {
        self.config.is_selectable() && self.config.variant() != Variant::Disabled
    }

    /// Whether sequential keyboard navigation may land on this card.
    pub fn is_focusable(&self) -> bool {
        self.is_interactive()
    }

    pub fn status(&self) -> CardStatus {
        if !self.is_interactive() {
            CardStatus::Disabled
        } else if self.active {
            CardStatus::Active
        } else {
            CardStatus::Inactive
        }
    }

    /// Screen-reader style description of the card and its selection state.
    pub fn accessible_label(&self) -> String {
        let state = match self.status() {
            CardStatus::Active => "selected",
            CardStatus::Inactive => "not selected",
            CardStatus::Disabled => "not selectable",
        };
        format!("{}, card, {}", self.config.title(), state)
    }

    /// Enter and Space activate the card.
    pub fn on_key(&self, key: KeyCode) -> Option<CardEvent> {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.activation(),
            _ => None,
        }
    }

    pub fn on_click(&self) -> Option<CardEvent> {
        self.activation()
    }

    fn activation(&self) -> Option<CardEvent> {
        if self.is_interactive() {
            Some(CardEvent::Activate(self.config.id().clone()))
        } else {
            None
        }
    }

    fn border_type(&self) -> BorderType {
        match (self.status(), self.config.variant()) {
            (CardStatus::Active, _) => BorderType::Thick,
            (_, Variant::Highlighted) => BorderType::Double,
            _ => BorderType::Rounded,
        }
    }

    fn border_style(&self) -> Style {
        match self.status() {
            CardStatus::Disabled => Theme::border_disabled(),
            _ if self.focused => Theme::border_focus(),
            CardStatus::Active => Theme::card_active(),
            CardStatus::Inactive => Style::default().fg(Theme::accent(self.config.accent())),
        }
    }

    fn title_line(&self, width: usize) -> Line<'static> {
        let text = match self.config.icon() {
            Some(icon) => format!("{} {}", icon, self.config.title()),
            None => self.config.title().to_string(),
        };
        // Corners and the padding spaces take four cells.
        let text = truncate(&text, width.saturating_sub(4));
        let style = if self.status() == CardStatus::Disabled {
            Theme::card_disabled()
        } else {
            Theme::bold()
        };
        Line::from(Span::styled(format!(" {} ", text), style))
    }

    fn status_line(&self) -> Line<'static> {
        let status = self.status();
        let style = match status {
            CardStatus::Active => Theme::card_active(),
            CardStatus::Inactive => Theme::card_inactive(),
            CardStatus::Disabled => Theme::card_disabled(),
        };
        Line::from(Span::styled(
            format!("{} {}", status.indicator(), status.label()),
            style,
        ))
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

impl Widget for CardComponent<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(self.border_type())
            .border_style(self.border_style())
            .title(self.title_line(area.width as usize));

        if let Some(badge) = self.config.badge() {
            let style = if self.status() == CardStatus::Disabled {
                Theme::card_disabled()
            } else {
                Theme::badge(self.config.accent())
            };
            block = block.title_bottom(
                Line::from(Span::styled(format!(" {} ", badge), style))
                    .alignment(Alignment::Right),
            );
        }

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 1 || inner.width < 5 {
            return;
        }

        let mut lines = vec![self.status_line()];

        if let Some(description) = self.config.description() {
            let style = if self.status() == CardStatus::Disabled {
                Theme::card_disabled()
            } else {
                Style::default()
            };
            let budget = (inner.height as usize).saturating_sub(lines.len());
            let wrapped = textwrap::wrap(description, inner.width as usize);
            let overflow = wrapped.len() > budget;
            for (i, line) in wrapped.into_iter().take(budget).enumerate() {
                let text = if overflow && i + 1 == budget {
                    truncate(&format!("{}…", line), inner.width as usize)
                } else {
                    line.into_owned()
                };
                lines.push(Line::from(Span::styled(text, style)));
            }
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Accent;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render(card: CardComponent<'_>) -> String {
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);
        card.render(area, &mut buf);
        buffer_text(&buf)
    }

    fn alpha() -> CardConfig {
        CardConfig::new("a", "Alpha")
            .unwrap()
            .with_description("First card")
            .with_badge("New")
    }

    #[test]
    fn enter_and_space_activate_selectable_card() {
        let config = alpha();
        let card = CardComponent::new(&config);
        let expected = Some(CardEvent::Activate(CardId::new("a").unwrap()));

        assert_eq!(card.on_key(KeyCode::Enter), expected);
        assert_eq!(card.on_key(KeyCode::Char(' ')), expected);
        assert_eq!(card.on_click(), expected);
        assert_eq!(card.on_key(KeyCode::Char('x')), None);
        assert_eq!(card.on_key(KeyCode::Tab), None);
    }

    #[test]
    fn disabled_card_suppresses_events() {
        let config = alpha().with_variant(Variant::Disabled);
        let card = CardComponent::new(&config);
        assert!(!card.is_interactive());
        assert!(!card.is_focusable());
        assert_eq!(card.on_key(KeyCode::Enter), None);
        assert_eq!(card.on_click(), None);
    }

    #[test]
    fn unselectable_card_is_not_focusable() {
        let config = alpha().with_variant(Variant::Highlighted).with_selectable(false);
        let card = CardComponent::new(&config);
        assert!(!card.is_focusable());
        assert_eq!(card.on_key(KeyCode::Char(' ')), None);
        assert_eq!(card.status(), CardStatus::Disabled);
    }

    #[test]
    fn accessible_label_reports_selection() {
        let config = alpha();
        assert_eq!(
            CardComponent::new(&config).active(true).accessible_label(),
            "Alpha, card, selected"
        );
        assert_eq!(
            CardComponent::new(&config).accessible_label(),
            "Alpha, card, not selected"
        );

        let config = alpha().with_variant(Variant::Disabled);
        assert_eq!(
            CardComponent::new(&config).accessible_label(),
            "Alpha, card, not selectable"
        );
    }

    #[test]
    fn renders_title_status_body_and_badge() {
        let config = alpha().with_icon("◆");
        let text = render(CardComponent::new(&config));
        assert!(text.contains("◆ Alpha"));
        assert!(text.contains("○ Inactive"));
        assert!(text.contains("First card"));
        assert!(text.contains(" New "));
    }

    #[test]
    fn active_card_shows_marker_and_thick_border() {
        let config = alpha();
        let text = render(CardComponent::new(&config).active(true));
        assert!(text.contains("● Active"));
        assert!(text.starts_with('┏'));
    }

    #[test]
    fn highlighted_card_uses_double_border() {
        let config = alpha().with_variant(Variant::Highlighted);
        let text = render(CardComponent::new(&config));
        assert!(text.starts_with('╔'));
    }

    #[test]
    fn disabled_card_ignores_active_flag() {
        let config = alpha().with_variant(Variant::Disabled);
        let card = CardComponent::new(&config).active(true);
        assert_eq!(card.status(), CardStatus::Disabled);
        let text = render(card);
        assert!(text.contains("✕ Disabled"));
        assert!(text.starts_with('╭'));
    }

    #[test]
    fn focus_colours_the_border() {
        let config = alpha().with_accent(Accent::Warning);
        let area = Rect::new(0, 0, 30, 8);

        let mut buf = Buffer::empty(area);
        CardComponent::new(&config).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].fg, Theme::accent(Accent::Warning));

        let mut buf = Buffer::empty(area);
        CardComponent::new(&config).focused(true).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].style().fg, Theme::border_focus().fg);
    }

    #[test]
    fn long_title_is_truncated() {
        let config = CardConfig::new("long", "An exceedingly long card title here").unwrap();
        let area = Rect::new(0, 0, 16, 6);
        let mut buf = Buffer::empty(area);
        CardComponent::new(&config).render(area, &mut buf);
        assert!(buffer_text(&buf).contains('…'));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo wörld", 5), "héll…");
        assert_eq!(truncate("short", 10), "short");
    }
}
