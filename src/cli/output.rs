use std::io::IsTerminal;

use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    /// Text on a terminal, JSON when piped.
    #[default]
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn resolve(self) -> ResolvedFormat {
        match self {
            Self::Text => ResolvedFormat::Text,
            Self::Json => ResolvedFormat::Json,
            Self::Auto if std::io::stdout().is_terminal() => ResolvedFormat::Text,
            Self::Auto => ResolvedFormat::Json,
        }
    }
}

/// Print `data` as JSON, or hand it to `text_fn` for human output.
pub fn emit<T, F>(data: &T, format: ResolvedFormat, text_fn: F)
where
    T: Serialize + ?Sized,
    F: FnOnce(&T),
{
    match format {
        ResolvedFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(data).expect("serialization should not fail")
            );
        }
        ResolvedFormat::Text => text_fn(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_formats_resolve_directly() {
        assert_eq!(OutputFormat::Text.resolve(), ResolvedFormat::Text);
        assert_eq!(OutputFormat::Json.resolve(), ResolvedFormat::Json);
    }

    #[test]
    fn text_format_calls_text_fn() {
        let mut called = false;
        emit(&[1, 2, 3][..], ResolvedFormat::Text, |items| {
            called = items.len() == 3;
        });
        assert!(called);
    }
}
