//! Init command implementation.

use crate::config::{AppConfig, CardFile};
use crate::error::Result;
use crate::harness::demo_cards;

pub fn run_init() -> Result<()> {
    let config_dir = AppConfig::config_dir()?;
    let config_path = AppConfig::config_path()?;

    if config_path.exists() {
        println!("Already initialized at {}", config_dir.display());
        return Ok(());
    }

    std::fs::create_dir_all(&config_dir)?;

    let cards_path = config_dir.join("cards.toml");
    if !cards_path.exists() {
        let cards = CardFile {
            cards: demo_cards(),
        };
        std::fs::write(&cards_path, cards.to_toml()?)?;
    }

    let config = AppConfig {
        cards_file: Some(cards_path),
        ..Default::default()
    };
    config.save()?;

    tracing::info!(path = %config_path.display(), "wrote default config");
    println!("Initialized hello-card at {}", config_dir.display());
    Ok(())
}
