use crate::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const KEYBINDINGS: &str = "q:quit  Tab/←/→:focus  ↑/↓:row  Enter/Space:select  v:highlight  r:reset  ?:help";

/// One-line footer: selection stats, focused card label, key hints and the
/// last message.
pub struct StatusBar<'a> {
    stats: &'a str,
    focus_label: Option<&'a str>,
    message: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    pub fn new(stats: &'a str) -> Self {
        Self {
            stats,
            focus_label: None,
            message: None,
        }
    }

    pub fn focus_label(mut self, label: Option<&'a str>) -> Self {
        self.focus_label = label;
        self
    }

    pub fn message(mut self, msg: Option<&'a str>) -> Self {
        self.message = msg;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(format!("[{}]", self.stats), Theme::stats()),
            Span::raw(" "),
        ];

        if let Some(label) = self.focus_label {
            spans.push(Span::styled(format!("<{}>", label), Theme::bold()));
            spans.push(Span::raw(" "));
        }

        spans.push(Span::styled(KEYBINDINGS, Theme::text_muted()));

        if let Some(msg) = self.message {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(msg, Theme::text_warning()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
