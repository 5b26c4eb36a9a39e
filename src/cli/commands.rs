//! CLI subcommand definitions.

use std::path::PathBuf;

use clap::Subcommand;

use super::output::OutputFormat;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive card demo.
    Tui,

    /// List cards with their variant and status.
    List {
        /// Output format.
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Activate cards in order and print the resulting selection.
    Activate {
        /// Card ids, applied left to right. Activating the active card deselects it.
        ids: Vec<String>,
        /// Output format.
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Validate a card file.
    Check {
        /// Path to a TOML card file.
        file: PathBuf,
    },

    /// Write a default configuration and card file.
    Init,
}
