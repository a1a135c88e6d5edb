//! Core data types for the extractor.
//!
//! These types are the canonical output records. Every optional field is
//! omitted from the JSON when absent; nothing is serialized as `null`.

use serde::{Deserialize, Serialize};

/// One card in one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faction: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,

    // Numeric tags are whole numbers; a fractional literal is rejected as
    // `InvalidNumber` rather than rounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub durability: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_play_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collectible: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elite: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_class: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub how_to_get: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub how_to_get_gold: Option<String>,

    /// Sorted mechanic tag names; `None` rather than empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mechanics: Option<Vec<String>>,
}

impl CardRecord {
    /// Create a record with only its identifier set.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Name used in log messages.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// One card back in one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardBackRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub how_to_get: Option<String>,
}

/// Records extracted from one or more documents, with non-fatal warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction<T> {
    pub records: Vec<T>,
    pub warnings: Vec<String>,
}

impl<T> Extraction<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Append another extraction's records and warnings.
    pub fn merge(&mut self, other: Extraction<T>) {
        self.records.extend(other.records);
        self.warnings.extend(other.warnings);
    }
}

impl<T> Default for Extraction<T> {
    fn default() -> Self {
        Self::new()
    }
}
