//! Configuration management for hello-card.

mod app;
mod card;
mod card_id;

pub use app::{AppConfig, LoggingConfig, TuiConfig};
pub use card::{Accent, CardConfig, CardFile, Variant};
pub use card_id::CardId;
