use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Margin, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::tui::theme::Theme;

/// Bordered placeholder with vertically centred, wrapped hint lines.
pub struct EmptyState<'a> {
    title: &'a str,
    lines: Vec<String>,
}

impl<'a> EmptyState<'a> {
    pub fn new(title: &'a str, lines: Vec<String>) -> Self {
        Self { title, lines }
    }

    fn wrapped_height(&self, width: usize) -> usize {
        if width == 0 {
            return 0;
        }
        self.lines
            .iter()
            .map(|line| textwrap::wrap(line, width).len().max(1))
            .sum()
    }
}

impl Widget for EmptyState<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Theme::border_disabled());

        let inner = block.inner(area);
        block.render(area, buf);

        let padded = inner.inner(Margin::new(4, 1));
        if padded.width == 0 || padded.height == 0 {
            return;
        }

        let height = self.wrapped_height(padded.width as usize);
        let offset = (padded.height as usize).saturating_sub(height) / 2;

        let content: Vec<Line> = self
            .lines
            .into_iter()
            .map(|line| Line::from(line).style(Theme::text_muted()))
            .collect();

        let content_area = Rect {
            y: padded.y + offset as u16,
            height: padded.height.saturating_sub(offset as u16),
            ..padded
        };

        Paragraph::new(content)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(content_area, buf);
    }
}
