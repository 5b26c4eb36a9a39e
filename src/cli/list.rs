use colored::Colorize;
use serde::Serialize;

use crate::cli::output::{ResolvedFormat, emit};
use crate::config::{Accent, Variant};
use crate::error::Result;
use crate::harness::{CardStatus, DemoHarness, HarnessState};

/// One card as shown by `list` and `activate`.
#[derive(Debug, Serialize)]
pub(crate) struct CardRow {
    id: String,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    variant: Variant,
    accent: Accent,
    selectable: bool,
    status: CardStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    badge: Option<String>,
}

pub(crate) fn card_rows(state: &HarnessState) -> Vec<CardRow> {
    state
        .cards()
        .iter()
        .map(|card| CardRow {
            id: card.id().to_string(),
            title: card.title().to_string(),
            description: card.description().map(String::from),
            variant: card.variant(),
            accent: card.accent(),
            selectable: card.is_selectable(),
            status: state.status_of(card),
            badge: card.badge().map(String::from),
        })
        .collect()
}

pub(crate) fn print_rows(rows: &[CardRow]) {
    if rows.is_empty() {
        println!("No cards found");
        return;
    }

    let id_width = rows.iter().map(|r| r.id.len()).max().unwrap_or(0);
    println!("Cards ({}):", rows.len());
    for row in rows {
        let marker = row.status.indicator().to_string();
        let marker = match row.status {
            CardStatus::Active => marker.green().bold(),
            CardStatus::Inactive => marker.normal(),
            CardStatus::Disabled => marker.dimmed(),
        };
        let kind = format!("{}/{}", row.variant, row.accent).dimmed();
        let badge = row
            .badge
            .as_deref()
            .map(|b| format!("  [{}]", b).yellow().to_string())
            .unwrap_or_default();
        println!(
            "  {} {:<width$}  {}  {}{}",
            marker,
            row.id,
            row.title,
            kind,
            badge,
            width = id_width
        );
    }
}

pub fn list_cards(harness: &DemoHarness, format: ResolvedFormat) -> Result<()> {
    let rows = card_rows(harness.snapshot());
    emit(rows.as_slice(), format, print_rows);
    Ok(())
}
