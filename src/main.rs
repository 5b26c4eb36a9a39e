mod cli;
mod config;
mod error;
mod harness;
mod logging;
mod tui;

use std::path::PathBuf;

use clap::Parser;
use cli::Commands;
use config::AppConfig;
use logging::LogTarget;

#[derive(Parser)]
#[command(name = "hello-card")]
#[command(version, about = "Reusable card component and interactive demo")]
struct Cli {
    /// TOML card file to use instead of the configured or built-in cards.
    #[arg(long, global = true)]
    cards: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    let log_path = AppConfig::log_path()?;
    let target = match cli.command {
        Commands::Tui => LogTarget::File(&log_path),
        _ => LogTarget::Stderr,
    };
    let _log_guard = logging::init(&config.logging, target);

    let cards = cli.cards.as_deref();
    match cli.command {
        Commands::Tui => cli::tui::run_tui(&config, cards)?,
        Commands::List { output } => {
            let harness = cli::build_harness(&config, cards)?;
            cli::list::list_cards(&harness, output.resolve())?
        }
        Commands::Activate { ids, output } => {
            let harness = cli::build_harness(&config, cards)?;
            cli::activate::activate_cards(harness, &ids, output.resolve())?
        }
        Commands::Check { file } => cli::check::check_card_file(&file)?,
        Commands::Init => cli::init::run_init()?,
    }

    Ok(())
}
