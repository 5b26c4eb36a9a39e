use std::path::Path;

use crate::config::AppConfig;
use crate::error::Result;

pub fn run_tui(config: &AppConfig, cards: Option<&Path>) -> Result<()> {
    let harness = super::build_harness(config, cards)?;
    crate::tui::run(harness, &config.tui)
}
