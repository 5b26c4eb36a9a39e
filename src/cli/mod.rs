//! CLI module for hello-card.

pub mod activate;
pub mod check;
mod commands;
pub mod init;
pub mod list;
pub mod output;
pub mod tui;

use std::path::Path;

pub use commands::Commands;

use crate::config::AppConfig;
use crate::error::Result;
use crate::harness::DemoHarness;

/// Build the harness from `--cards`, the configured card file, or the
/// built-in demo set, in that order.
pub(crate) fn build_harness(config: &AppConfig, cards: Option<&Path>) -> Result<DemoHarness> {
    match config.load_cards(cards)? {
        Some(cards) => Ok(DemoHarness::new(cards)?),
        None => Ok(DemoHarness::demo()),
    }
}
