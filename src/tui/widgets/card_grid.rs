use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::{StatefulWidget, Widget},
};

use crate::config::CardConfig;
use crate::harness::HarnessState;

use super::CardComponent;
use super::EmptyState;

const CARD_WIDTH: u16 = 30;
const CARD_HEIGHT: u16 = 8;
const CARD_GAP: u16 = 1;

/// Transient grid state: keyboard focus, scroll position and the areas of
/// the cards drawn in the last frame (for pointer hit testing).
#[derive(Debug, Clone)]
pub struct CardGridState {
    pub focused: Option<usize>,
    pub scroll_offset: usize,
    columns: usize,
    areas: Vec<(usize, Rect)>,
}

impl CardGridState {
    pub fn new() -> Self {
        Self {
            focused: None,
            scroll_offset: 0,
            columns: 1,
            areas: Vec::new(),
        }
    }

    pub fn focus_first(&mut self, cards: &[CardConfig]) {
        self.focused = focusable(cards).iter().position(|f| *f);
    }

    /// Move focus to the next focusable card, wrapping around.
    pub fn focus_next(&mut self, cards: &[CardConfig]) {
        let focusable = focusable(cards);
        let total = focusable.len();
        if total == 0 {
            return;
        }
        let start = self.focused.map_or(0, |i| i + 1);
        self.focused = (0..total)
            .map(|step| (start + step) % total)
            .find(|&i| focusable[i])
            .or(self.focused);
    }

    /// Move focus to the previous focusable card, wrapping around.
    pub fn focus_prev(&mut self, cards: &[CardConfig]) {
        let focusable = focusable(cards);
        let total = focusable.len();
        if total == 0 {
            return;
        }
        let start = self.focused.unwrap_or(0) + total;
        self.focused = (1..=total)
            .map(|step| (start - step) % total)
            .find(|&i| focusable[i])
            .or(self.focused);
    }

    /// Move focus one row down, to the first focusable card at or after
    /// the cell below. Stays put at the bottom.
    pub fn focus_down(&mut self, cards: &[CardConfig]) {
        let Some(current) = self.focused else {
            self.focus_first(cards);
            return;
        };
        let focusable = focusable(cards);
        let target = current + self.columns;
        if let Some(i) = (target..focusable.len()).find(|&i| focusable[i]) {
            self.focused = Some(i);
        }
    }

    /// Move focus one row up, to the last focusable card at or before the
    /// cell above. Stays put at the top.
    pub fn focus_up(&mut self, cards: &[CardConfig]) {
        let Some(current) = self.focused else {
            self.focus_first(cards);
            return;
        };
        let Some(target) = current.checked_sub(self.columns) else {
            return;
        };
        let focusable = focusable(cards);
        if let Some(i) = (0..=target).rev().find(|&i| focusable.get(i) == Some(&true)) {
            self.focused = Some(i);
        }
    }

    /// Index of the card drawn at the given screen cell, if any.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.areas
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(idx, _)| *idx)
    }

    fn clamp(&mut self, cards: &[CardConfig]) {
        let focusable = focusable(cards);
        match self.focused {
            Some(i) if i < focusable.len() && focusable[i] => {}
            _ => self.focused = focusable.iter().position(|f| *f),
        }
    }
}

impl Default for CardGridState {
    fn default() -> Self {
        Self::new()
    }
}

fn focusable(cards: &[CardConfig]) -> Vec<bool> {
    cards
        .iter()
        .map(|card| CardComponent::new(card).is_focusable())
        .collect()
}

/// Lays the harness cards out left to right, top to bottom.
pub struct CardGrid<'a> {
    state: &'a HarnessState,
}

impl<'a> CardGrid<'a> {
    pub fn new(state: &'a HarnessState) -> Self {
        Self { state }
    }

    fn calc_columns(width: u16) -> usize {
        let usable = width.saturating_sub(CARD_GAP);
        let card_with_gap = CARD_WIDTH + CARD_GAP;
        (usable / card_with_gap).max(1) as usize
    }
}

impl StatefulWidget for CardGrid<'_> {
    type State = CardGridState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.areas.clear();
        let cards = self.state.cards();

        if cards.is_empty() {
            let lines = vec![
                "No cards to show".to_string(),
                String::new(),
                "Pass --cards <FILE> to load a card file".to_string(),
            ];
            EmptyState::new("Cards", lines).render(area, buf);
            return;
        }

        if area.width < CARD_WIDTH || area.height < CARD_HEIGHT {
            return;
        }

        let cols = Self::calc_columns(area.width);
        state.columns = cols;
        state.clamp(cards);

        let visible_rows = (area.height / (CARD_HEIGHT + CARD_GAP)).max(1) as usize;
        let anchor_row = state.focused.unwrap_or(0) / cols;

        if anchor_row < state.scroll_offset {
            state.scroll_offset = anchor_row;
        } else if anchor_row >= state.scroll_offset + visible_rows {
            state.scroll_offset = anchor_row - visible_rows + 1;
        }

        for row in 0..visible_rows {
            let data_row = state.scroll_offset + row;
            for col in 0..cols {
                let idx = data_row * cols + col;
                let Some(card) = cards.get(idx) else {
                    break;
                };

                let x = area.x + (col as u16) * (CARD_WIDTH + CARD_GAP);
                let y = area.y + (row as u16) * (CARD_HEIGHT + CARD_GAP);

                if x + CARD_WIDTH > area.x + area.width || y + CARD_HEIGHT > area.y + area.height {
                    continue;
                }

                let card_area = Rect::new(x, y, CARD_WIDTH, CARD_HEIGHT);
                CardComponent::new(card)
                    .active(self.state.is_active(card.id().as_str()))
                    .focused(state.focused == Some(idx))
                    .render(card_area, buf);
                state.areas.push((idx, card_area));
            }
        }
    }
}
