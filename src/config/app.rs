//! hello-card's own configuration file handling.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{CardConfig, CardFile};
use crate::error::{Error, Result};

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Event poll interval in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Open the help modal when the demo starts.
    #[serde(default)]
    pub show_help_on_start: bool,
}

fn default_tick_ms() -> u64 {
    100
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            show_help_on_start: false,
        }
    }
}

/// Logging configuration. `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// hello-card's configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Card file used when no `--cards` flag is given.
    /// Falls back to the built-in demo cards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cards_file: Option<PathBuf>,

    /// TUI-specific settings.
    #[serde(default)]
    pub tui: TuiConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Self = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Get the default configuration file path.
    pub fn config_path() -> Result<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Get the configuration directory path.
    ///
    /// Respects the `HELLO_CARD_CONFIG_DIR` environment variable for testing.
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var("HELLO_CARD_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }
        dirs::config_dir()
            .map(|d| d.join("hello-card"))
            .ok_or_else(|| Error::NoConfigFound("no platform config directory".to_string()))
    }

    /// Path of the log file written while the TUI owns the terminal.
    pub fn log_path() -> Result<PathBuf> {
        Self::config_dir().map(|d| d.join("hello-card.log"))
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Resolve the cards to show.
    ///
    /// An explicit path wins over `cards_file`; with neither, `None` is
    /// returned and the caller picks its built-in set. A relative
    /// `cards_file` is taken relative to the config directory.
    pub fn load_cards(&self, explicit: Option<&Path>) -> Result<Option<Vec<CardConfig>>> {
        let path = match (explicit, &self.cards_file) {
            (Some(path), _) => path.to_path_buf(),
            (None, Some(configured)) if configured.is_absolute() => configured.clone(),
            (None, Some(configured)) => Self::resolve_configured(configured, &Self::config_dir()?),
            (None, None) => return Ok(None),
        };
        tracing::debug!(path = %path.display(), "loading card file");
        Ok(Some(CardFile::load(&path)?.cards))
    }

    fn resolve_configured(path: &Path, config_dir: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            config_dir.join(path)
        }
    }
}
