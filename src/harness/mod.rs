//! Demo harness: owns the card list and the single-select active card.

mod demo;

use std::collections::HashSet;

use serde::Serialize;

use crate::config::{CardConfig, CardId};
use crate::error::ConfigError;

pub use demo::demo_cards;

/// Derived per-card state. Never stored; computed from [`HarnessState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    Inactive,
    Active,
    Disabled,
}

impl CardStatus {
    pub fn indicator(self) -> char {
        match self {
            Self::Active => '●',
            Self::Inactive => '○',
            Self::Disabled => '✕',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Disabled => "Disabled",
        }
    }
}

/// Outcome of a selection request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Unknown or non-selectable id, or nothing to clear. State untouched.
    Ignored,
    /// Selection changed. Only these cards need to be redrawn.
    Changed {
        deactivated: Option<CardId>,
        activated: Option<CardId>,
    },
}

impl Activation {
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }

    /// Ids whose status changed, previously active first.
    pub fn affected(&self) -> Vec<&CardId> {
        match self {
            Self::Ignored => Vec::new(),
            Self::Changed {
                deactivated,
                activated,
            } => deactivated.iter().chain(activated.iter()).collect(),
        }
    }
}

/// Everything the harness owns. Read through [`DemoHarness::snapshot`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct HarnessState {
    cards: Vec<CardConfig>,
    active_card_id: Option<CardId>,
    activation_count: u64,
}

impl HarnessState {
    /// Cards in display order.
    pub fn cards(&self) -> &[CardConfig] {
        &self.cards
    }

    pub fn active_card_id(&self) -> Option<&CardId> {
        self.active_card_id.as_ref()
    }

    pub fn active_card(&self) -> Option<&CardConfig> {
        let id = self.active_card_id.as_ref()?;
        self.card(id.as_str())
    }

    /// Number of accepted activations, selections and deselections alike.
    pub fn activation_count(&self) -> u64 {
        self.activation_count
    }

    pub fn card(&self, id: &str) -> Option<&CardConfig> {
        self.cards.iter().find(|c| c.id() == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == id)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_card_id.as_ref().is_some_and(|a| a == id)
    }

    pub fn status_of(&self, card: &CardConfig) -> CardStatus {
        if !card.is_selectable() {
            CardStatus::Disabled
        } else if self.is_active(card.id().as_str()) {
            CardStatus::Active
        } else {
            CardStatus::Inactive
        }
    }
}

/// Owns a [`HarnessState`] and applies selection events to it.
#[derive(Debug)]
pub struct DemoHarness {
    state: HarnessState,
}

impl DemoHarness {
    /// Build a harness from an ordered card list.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateId`] if two cards share an id.
    pub fn new(cards: Vec<CardConfig>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for card in &cards {
            if !seen.insert(card.id().as_str()) {
                return Err(ConfigError::DuplicateId(card.id().to_string()));
            }
        }

        tracing::debug!(cards = cards.len(), "harness created");
        Ok(Self {
            state: HarnessState {
                cards,
                active_card_id: None,
                activation_count: 0,
            },
        })
    }

    /// Harness over the built-in demo cards.
    pub fn demo() -> Self {
        Self {
            state: HarnessState {
                cards: demo_cards(),
                ..Default::default()
            },
        }
    }

    /// Read-only view of the current state.
    pub fn snapshot(&self) -> &HarnessState {
        &self.state
    }

    pub fn status_of(&self, id: &str) -> Option<CardStatus> {
        self.state.card(id).map(|card| self.state.status_of(card))
    }

    /// Toggle selection of `id`.
    ///
    /// Activating the active card deselects it. Unknown and non-selectable
    /// ids are ignored without error.
    pub fn activate(&mut self, id: &str) -> Activation {
        let Some(card) = self.state.card(id) else {
            tracing::debug!(id, "ignoring activation of unknown card");
            return Activation::Ignored;
        };

        if !card.is_selectable() {
            tracing::debug!(id, "ignoring activation of non-selectable card");
            return Activation::Ignored;
        }

        let target = card.id().clone();
        let title = card.title().to_string();
        self.state.activation_count += 1;

        let activation = if self.state.is_active(id) {
            self.state.active_card_id = None;
            Activation::Changed {
                deactivated: Some(target),
                activated: None,
            }
        } else {
            let previous = self.state.active_card_id.replace(target.clone());
            Activation::Changed {
                deactivated: previous,
                activated: Some(target),
            }
        };

        tracing::info!(
            id,
            title = %title,
            selected = self.state.is_active(id),
            total = self.state.activation_count,
            "card activated"
        );
        activation
    }

    /// Clear the selection and the activation counter.
    pub fn reset(&mut self) -> Activation {
        self.state.activation_count = 0;
        match self.state.active_card_id.take() {
            Some(previous) => {
                tracing::info!(id = %previous, "selection reset");
                Activation::Changed {
                    deactivated: Some(previous),
                    activated: None,
                }
            }
            None => Activation::Ignored,
        }
    }

    /// Substitute a new value for the card with the same id, keeping its
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownCard`] if no card has that id.
    pub fn replace_card(&mut self, card: CardConfig) -> Result<Activation, ConfigError> {
        let Some(pos) = self.state.position(card.id().as_str()) else {
            return Err(ConfigError::UnknownCard(card.id().to_string()));
        };

        let id = card.id().clone();
        let loses_selection = self.state.is_active(id.as_str()) && !card.is_selectable();
        self.state.cards[pos] = card;

        if loses_selection {
            self.state.active_card_id = None;
            return Ok(Activation::Changed {
                deactivated: Some(id),
                activated: None,
            });
        }
        Ok(Activation::Ignored)
    }

    /// One-line summary of the selection for status bars.
    pub fn stats_text(&self) -> String {
        let selected = match self.state.active_card() {
            Some(card) => format!("Selected: {}", card.title()),
            None => "No selection".to_string(),
        };
        format!(
            "{} | Total activations: {}",
            selected, self.state.activation_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Variant;

    fn card(id: &str) -> CardConfig {
        CardConfig::new(id, id.to_uppercase()).unwrap()
    }

    fn disabled(id: &str) -> CardConfig {
        card(id).with_variant(Variant::Disabled)
    }

    fn harness() -> DemoHarness {
        DemoHarness::new(vec![
            card("a"),
            card("b"),
            disabled("c"),
            card("d").with_selectable(false),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = DemoHarness::new(vec![card("a"), card("b"), card("a")]).unwrap_err();
        assert_eq!(err, ConfigError::DuplicateId("a".to_string()));
    }

    #[test]
    fn empty_harness_is_allowed() {
        let mut harness = DemoHarness::new(Vec::new()).unwrap();
        assert!(harness.snapshot().cards().is_empty());
        assert_eq!(harness.activate("a"), Activation::Ignored);
    }

    #[test]
    fn starts_with_nothing_active() {
        let harness = harness();
        assert!(harness.snapshot().active_card_id().is_none());
        assert_eq!(harness.status_of("a"), Some(CardStatus::Inactive));
        assert_eq!(harness.status_of("c"), Some(CardStatus::Disabled));
        assert_eq!(harness.status_of("d"), Some(CardStatus::Disabled));
        assert_eq!(harness.status_of("zzz"), None);
    }

    #[test]
    fn activate_twice_toggles_back() {
        let mut harness = harness();

        let first = harness.activate("a");
        assert_eq!(
            first,
            Activation::Changed {
                deactivated: None,
                activated: Some(CardId::new("a").unwrap()),
            }
        );
        assert_eq!(harness.snapshot().active_card_id().unwrap(), "a");

        let second = harness.activate("a");
        assert_eq!(
            second,
            Activation::Changed {
                deactivated: Some(CardId::new("a").unwrap()),
                activated: None,
            }
        );
        assert!(harness.snapshot().active_card_id().is_none());
    }

    #[test]
    fn double_activation_of_active_card_keeps_it_active() {
        let mut harness = harness();
        harness.activate("a");

        harness.activate("a");
        harness.activate("a");
        assert_eq!(harness.snapshot().active_card_id().unwrap(), "a");
        assert_eq!(harness.snapshot().activation_count(), 3);
    }

    #[test]
    fn double_activation_from_other_selection_clears_it() {
        let mut harness = harness();
        harness.activate("b");

        harness.activate("a");
        assert_eq!(harness.snapshot().active_card_id().unwrap(), "a");
        harness.activate("a");
        assert!(harness.snapshot().active_card_id().is_none());
        assert_eq!(harness.status_of("b"), Some(CardStatus::Inactive));
    }

    #[test]
    fn switching_reports_both_cards() {
        let mut harness = harness();
        harness.activate("a");
        let change = harness.activate("b");

        let affected: Vec<&str> = change.affected().iter().map(|id| id.as_str()).collect();
        assert_eq!(affected, ["a", "b"]);
        assert_eq!(harness.status_of("a"), Some(CardStatus::Inactive));
        assert_eq!(harness.status_of("b"), Some(CardStatus::Active));
    }

    #[test]
    fn disabled_cards_are_immune() {
        let mut harness = harness();
        assert_eq!(harness.activate("c"), Activation::Ignored);
        assert_eq!(harness.activate("d"), Activation::Ignored);
        assert!(harness.snapshot().active_card_id().is_none());

        harness.activate("b");
        assert_eq!(harness.activate("c"), Activation::Ignored);
        assert_eq!(harness.activate("d"), Activation::Ignored);
        assert_eq!(harness.snapshot().active_card_id().unwrap(), "b");
        assert_eq!(harness.snapshot().activation_count(), 1);
    }

    #[test]
    fn unknown_id_is_a_noop() {
        let mut harness = harness();
        harness.activate("a");
        let before = harness.snapshot().clone();

        assert_eq!(harness.activate("nonexistent"), Activation::Ignored);
        assert_eq!(harness.activate(""), Activation::Ignored);

        let after = harness.snapshot();
        assert_eq!(after.active_card_id(), before.active_card_id());
        assert_eq!(after.activation_count(), before.activation_count());
        assert_eq!(after.cards(), before.cards());
    }

    #[test]
    fn at_most_one_card_is_active() {
        let mut harness = harness();
        let sequence = ["a", "b", "c", "b", "zzz", "a", "d", "a", "b", "b", "a"];

        for id in sequence {
            harness.activate(id);
            let snapshot = harness.snapshot();
            let active = snapshot
                .cards()
                .iter()
                .filter(|c| snapshot.status_of(c) == CardStatus::Active)
                .count();
            assert!(active <= 1);
            if let Some(id) = snapshot.active_card_id() {
                assert!(snapshot.card(id.as_str()).is_some());
                assert_eq!(active, 1);
            }
        }
    }

    #[test]
    fn alpha_beta_scenario() {
        let mut harness = DemoHarness::new(vec![
            CardConfig::new("a", "Alpha").unwrap(),
            CardConfig::new("b", "Beta")
                .unwrap()
                .with_variant(Variant::Disabled)
                .with_selectable(false),
        ])
        .unwrap();

        harness.activate("b");
        assert!(harness.snapshot().active_card_id().is_none());

        harness.activate("a");
        assert_eq!(harness.snapshot().active_card_id().unwrap(), "a");

        harness.activate("a");
        assert!(harness.snapshot().active_card_id().is_none());
    }

    #[test]
    fn reset_clears_selection_and_count() {
        let mut harness = harness();
        harness.activate("a");
        harness.activate("b");

        let change = harness.reset();
        assert_eq!(
            change,
            Activation::Changed {
                deactivated: Some(CardId::new("b").unwrap()),
                activated: None,
            }
        );
        assert!(harness.snapshot().active_card_id().is_none());
        assert_eq!(harness.snapshot().activation_count(), 0);
        assert_eq!(harness.reset(), Activation::Ignored);
    }

    #[test]
    fn replace_keeps_position() {
        let mut harness = harness();
        let replacement = CardConfig::new("b", "Bravo").unwrap();

        assert_eq!(harness.replace_card(replacement), Ok(Activation::Ignored));
        assert_eq!(harness.snapshot().position("b"), Some(1));
        assert_eq!(harness.snapshot().cards()[1].title(), "Bravo");
    }

    #[test]
    fn replacing_active_card_with_disabled_clears_selection() {
        let mut harness = harness();
        harness.activate("a");

        let change = harness.replace_card(disabled("a")).unwrap();
        assert!(change.is_changed());
        assert!(harness.snapshot().active_card_id().is_none());
        assert_eq!(harness.status_of("a"), Some(CardStatus::Disabled));
    }

    #[test]
    fn replacing_unknown_card_fails() {
        let mut harness = harness();
        assert_eq!(
            harness.replace_card(card("zzz")),
            Err(ConfigError::UnknownCard("zzz".to_string()))
        );
    }

    #[test]
    fn stats_text_tracks_selection() {
        let mut harness = DemoHarness::new(vec![CardConfig::new("a", "Alpha").unwrap()]).unwrap();
        assert_eq!(harness.stats_text(), "No selection | Total activations: 0");

        harness.activate("a");
        assert_eq!(harness.stats_text(), "Selected: Alpha | Total activations: 1");

        harness.activate("a");
        assert_eq!(harness.stats_text(), "No selection | Total activations: 2");
    }

    #[test]
    fn demo_harness_has_unique_ids() {
        let demo = DemoHarness::demo();
        assert!(DemoHarness::new(demo.snapshot().cards().to_vec()).is_ok());
    }
}
