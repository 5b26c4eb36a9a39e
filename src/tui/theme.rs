use ratatui::style::{Color, Modifier, Style};

use crate::config::Accent;

/// Theme constants for consistent styling across the TUI.
pub struct Theme;

impl Theme {
    // Card borders
    pub fn border_focus() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_disabled() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn accent(accent: Accent) -> Color {
        match accent {
            Accent::Primary => Color::Blue,
            Accent::Secondary => Color::Gray,
            Accent::Success => Color::Green,
            Accent::Info => Color::LightCyan,
            Accent::Warning => Color::Yellow,
            Accent::Danger => Color::Red,
        }
    }

    // Card states
    pub fn card_active() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn card_inactive() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn card_disabled() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    }

    pub fn badge(accent: Accent) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::accent(accent))
            .add_modifier(Modifier::BOLD)
    }

    // Text styles
    pub fn text_muted() -> Style {
        Style::default().add_modifier(Modifier::DIM)
    }

    pub fn text_warning() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn stats() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    // Help modal
    pub fn help_border() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn help_background() -> Style {
        Style::default().bg(Color::Black)
    }

    pub fn bold() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }
}
