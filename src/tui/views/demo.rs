use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use crate::harness::HarnessState;
use crate::tui::theme::Theme;
use crate::tui::widgets::{CardGrid, CardGridState};

pub struct DemoViewState {
    pub grid_state: CardGridState,
}

impl DemoViewState {
    pub fn new() -> Self {
        Self {
            grid_state: CardGridState::new(),
        }
    }
}

impl Default for DemoViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Heading plus the card grid.
pub struct DemoView<'a> {
    state: &'a HarnessState,
}

impl<'a> DemoView<'a> {
    pub fn new(state: &'a HarnessState) -> Self {
        Self { state }
    }
}

impl StatefulWidget for DemoView<'_> {
    type State = DemoViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [header, body] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

        let selectable = self
            .state
            .cards()
            .iter()
            .filter(|c| c.is_selectable())
            .count();
        Paragraph::new(Line::from(vec![
            Span::styled("Hello Card Demo", Theme::bold()),
            Span::styled(
                format!(
                    "  {} cards, {} selectable",
                    self.state.cards().len(),
                    selectable
                ),
                Theme::text_muted(),
            ),
        ]))
        .render(header, buf);

        CardGrid::new(self.state).render(body, buf, &mut state.grid_state);
    }
}
