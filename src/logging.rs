//! Tracing subscriber setup.
//!
//! Headless commands log to stderr. The TUI owns the terminal, so it logs
//! to a file in the config directory instead.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Where log lines go.
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

fn filter(config: &LoggingConfig) -> EnvFilter {
    // RUST_LOG > config file > "info"
    let default_filter = format!("hello_card={}", config.level);
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into())
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be kept
/// alive until the program exits.
pub fn init(config: &LoggingConfig, target: LogTarget<'_>) -> Option<WorkerGuard> {
    match target {
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(filter(config))
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
            None
        }
        LogTarget::File(path) => {
            let (Some(dir), Some(file_name)) = (path.parent(), path.file_name()) else {
                return None;
            };
            if let Err(e) = std::fs::create_dir_all(dir) {
                eprintln!(
                    "Warning: could not create log directory {}: {}",
                    dir.display(),
                    e
                );
                return None;
            }

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter(config))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false),
                )
                .init();
            Some(guard)
        }
    }
}
