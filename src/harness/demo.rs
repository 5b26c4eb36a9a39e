use crate::config::{Accent, CardConfig, Variant};

/// Built-in cards shown when no card file is configured.
///
/// Covers every variant and accent used by the card widget.
pub fn demo_cards() -> Vec<CardConfig> {
    [
        CardConfig::new("hello-world", "Hello World").map(|c| {
            c.with_description("This is my first card component!")
                .with_icon("◎")
                .with_badge("New")
        }),
        CardConfig::new("welcome", "Welcome").map(|c| {
            c.with_description("Welcome to terminal component development.")
                .with_accent(Accent::Success)
                .with_icon("✔")
        }),
        CardConfig::new("learning", "Learning").map(|c| {
            c.with_description("Learning ratatui widgets is fun and easy!")
                .with_accent(Accent::Info)
                .with_icon("✎")
                .with_badge("Hot")
        }),
        CardConfig::new("development", "Development").map(|c| {
            c.with_description("Building reusable components.")
                .with_accent(Accent::Warning)
                .with_icon("⌘")
        }),
        CardConfig::new("featured", "Featured").map(|c| {
            c.with_description("Highlighted cards draw a double border.")
                .with_variant(Variant::Highlighted)
                .with_accent(Accent::Danger)
                .with_icon("★")
        }),
        CardConfig::new("archived", "Archived").map(|c| {
            c.with_description("Disabled cards cannot be focused or selected.")
                .with_variant(Variant::Disabled)
                .with_accent(Accent::Secondary)
        }),
    ]
    .into_iter()
    .flatten()
    .collect()
}
