use serde::Serialize;

use super::list::{CardRow, card_rows, print_rows};
use crate::cli::output::{ResolvedFormat, emit};
use crate::error::Result;
use crate::harness::{Activation, DemoHarness};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Outcome {
    Selected,
    Deselected,
    Ignored,
}

#[derive(Debug, Serialize)]
struct Step {
    id: String,
    outcome: Outcome,
}

#[derive(Debug, Serialize)]
struct SelectionReport {
    steps: Vec<Step>,
    active_card_id: Option<String>,
    activation_count: u64,
    cards: Vec<CardRow>,
}

fn outcome(activation: &Activation) -> Outcome {
    match activation {
        Activation::Ignored => Outcome::Ignored,
        Activation::Changed {
            activated: Some(_), ..
        } => Outcome::Selected,
        Activation::Changed { .. } => Outcome::Deselected,
    }
}

fn replay(harness: &mut DemoHarness, ids: &[String]) -> Vec<Step> {
    ids.iter()
        .map(|id| Step {
            id: id.clone(),
            outcome: outcome(&harness.activate(id)),
        })
        .collect()
}

/// Apply `ids` in order and report the selection after each step.
pub fn activate_cards(
    mut harness: DemoHarness,
    ids: &[String],
    format: ResolvedFormat,
) -> Result<()> {
    let steps = replay(&mut harness, ids);
    let state = harness.snapshot();
    let report = SelectionReport {
        steps,
        active_card_id: state.active_card_id().map(|id| id.to_string()),
        activation_count: state.activation_count(),
        cards: card_rows(state),
    };

    emit(&report, format, |report| {
        for step in &report.steps {
            let outcome = match step.outcome {
                Outcome::Selected => "selected",
                Outcome::Deselected => "deselected",
                Outcome::Ignored => "ignored",
            };
            println!("activate {}: {}", step.id, outcome);
        }
        println!("{}", harness.stats_text());
        print_rows(&report.cards);
    });
    Ok(())
}
