//! Card configuration values and card files.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::CardId;
use crate::error::{ConfigError, Result};

/// Visual and interactive mode of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Highlighted,
    /// Never selectable, never reachable by keyboard navigation.
    Disabled,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Highlighted => "highlighted",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Colour family of a card's border, icon and badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Primary,
    Secondary,
    Success,
    Info,
    Warning,
    Danger,
}

impl Accent {
    pub fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Displayable state of one card.
///
/// Immutable once built: replacing a card means building a new value and
/// handing it to [`crate::harness::DemoHarness::replace_card`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCardConfig")]
pub struct CardConfig {
    id: CardId,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    variant: Variant,
    selectable: bool,
    accent: Accent,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    badge: Option<String>,
}

impl CardConfig {
    /// Create a selectable, default-variant card.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the id is invalid or the title is blank.
    pub fn new(id: &str, title: impl Into<String>) -> std::result::Result<Self, ConfigError> {
        let id = CardId::new(id)?;
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle(id.to_string()));
        }

        Ok(Self {
            id,
            title,
            description: None,
            variant: Variant::Default,
            selectable: true,
            accent: Accent::default(),
            icon: None,
            badge: None,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self.normalize();
        self
    }

    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self.normalize();
        self
    }

    pub fn with_accent(mut self, accent: Accent) -> Self {
        self.accent = accent;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Blank badge text means no badge.
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        let badge = badge.into();
        self.badge = (!badge.trim().is_empty()).then_some(badge);
        self
    }

    fn normalize(&mut self) {
        if self.variant == Variant::Disabled {
            self.selectable = false;
        }
    }

    pub fn id(&self) -> &CardId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn accent(&self) -> Accent {
        self.accent
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn badge(&self) -> Option<&str> {
        self.badge.as_deref()
    }

    /// Whether the card may ever become active.
    pub fn is_selectable(&self) -> bool {
        self.selectable && self.variant != Variant::Disabled
    }
}

/// Unvalidated card as written in a card file.
#[derive(Debug, Deserialize)]
struct RawCardConfig {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default, alias = "message")]
    description: Option<String>,
    #[serde(default)]
    variant: Variant,
    #[serde(default = "default_selectable")]
    selectable: bool,
    #[serde(default, alias = "color")]
    accent: Accent,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    badge: Option<String>,
}

fn default_selectable() -> bool {
    true
}

impl TryFrom<RawCardConfig> for CardConfig {
    type Error = ConfigError;

    fn try_from(raw: RawCardConfig) -> std::result::Result<Self, Self::Error> {
        let mut card = CardConfig::new(&raw.id, raw.title)?
            .with_variant(raw.variant)
            .with_selectable(raw.selectable)
            .with_accent(raw.accent);
        card.description = raw.description;
        card.icon = raw.icon;
        if let Some(badge) = raw.badge {
            card = card.with_badge(badge);
        }
        Ok(card)
    }
}

/// A TOML file holding an ordered list of cards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardFile {
    #[serde(default)]
    pub cards: Vec<CardConfig>,
}

impl CardFile {
    /// Parse a card file from TOML text.
    ///
    /// Per-card validation errors surface as TOML errors carrying the
    /// [`ConfigError`] message.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
