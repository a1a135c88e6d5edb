//! Value coercion: turning a raw tag into a typed value.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::config::FALLBACK_LANGUAGE;
use crate::error::{ExtractError, Result};
use crate::fields::FieldKind;
use crate::language::Language;
use crate::resolver::{DeclaredType, RawTag};
use crate::schema::TagTables;
use crate::xml::{find_child, get_text};

/// Encoded or literal non-breaking spaces.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NBSP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&nbsp;|&#160;|&#xA0;|\u{00A0}").expect("valid regex"));

/// A typed tag value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    Text(String),
    Number(i64),
    Bool(bool),
}

impl TagValue {
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Number(_) => FieldKind::Number,
            Self::Bool(_) => FieldKind::Bool,
        }
    }

    /// Whether the value counts as "set" for a mechanic flag.
    ///
    /// Numeric mechanics such as `Spellpower` carry an amount; any non-zero
    /// amount marks the mechanic as present.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::Number(n) => *n != 0,
            Self::Bool(b) => *b,
        }
    }
}

/// Replace non-breaking spaces with plain spaces.
///
/// # Examples
/// ```
/// use cardjson_extractor::coerce::normalize_spaces;
///
/// assert_eq!(normalize_spaces("Deal&nbsp;2 damage."), "Deal 2 damage.");
/// assert_eq!(normalize_spaces("Deal\u{a0}2 damage."), "Deal 2 damage.");
/// ```
#[must_use]
pub fn normalize_spaces(text: &str) -> String {
    NBSP_PATTERN.replace_all(text, " ").into_owned()
}

/// Converts raw tags into typed values using one generation's tables.
#[derive(Debug, Clone, Copy)]
pub struct ValueCoercer {
    tables: &'static TagTables,
}

impl ValueCoercer {
    #[must_use]
    pub fn new(tables: &'static TagTables) -> Self {
        Self { tables }
    }

    /// Coerce a raw tag for `language`.
    ///
    /// Returns `Ok(None)` when the tag deliberately carries no value: an
    /// enumerated code mapped to "no value", or a string tag without text for
    /// the requested or fallback language. Language fallbacks are pushed to
    /// `warnings`.
    ///
    /// # Errors
    /// - `UnknownEnumValue` for an enumerated tag with an unmapped code
    /// - `UnhandledDeclaredType` for a declared type no rule handles
    /// - `InvalidNumber` for a malformed number
    /// - `MissingElement` for a non-string tag without a `value` attribute
    pub fn coerce(
        &self,
        raw: &RawTag<'_, '_>,
        language: Language,
        warnings: &mut Vec<String>,
    ) -> Result<Option<TagValue>> {
        let declared = match &raw.declared_type {
            DeclaredType::Untyped if self.tables.is_bool_tag(raw.name) => DeclaredType::Bool,
            DeclaredType::Untyped => DeclaredType::Number,
            other => other.clone(),
        };

        if declared == DeclaredType::String {
            return Ok(self.localized_text(raw, language, warnings).map(TagValue::Text));
        }

        let value = raw.value.ok_or_else(|| ExtractError::MissingElement {
            element: "value attribute".to_string(),
            context: format!("Tag {}", raw.name),
        })?;

        if let Some(map) = self.tables.value_map(raw.name) {
            let mapped = value
                .trim()
                .parse::<i64>()
                .ok()
                .and_then(|code| map.lookup(code))
                .ok_or_else(|| ExtractError::UnknownEnumValue {
                    tag: raw.name.to_string(),
                    value: value.to_string(),
                })?;
            return Ok(mapped.map(|s| TagValue::Text(s.to_string())));
        }

        match declared {
            DeclaredType::Number => parse_number(raw.name, value).map(|n| Some(TagValue::Number(n))),
            DeclaredType::Bool => Ok(Some(TagValue::Bool(value.trim() == "1"))),
            other => Err(ExtractError::UnhandledDeclaredType {
                tag: raw.name.to_string(),
                declared: other.as_str().to_string(),
            }),
        }
    }

    /// Text of a string tag.
    ///
    /// Enum-based documents embed the text directly; by-name documents hold
    /// one child node per language and fall back to the default language.
    fn localized_text(
        &self,
        raw: &RawTag<'_, '_>,
        language: Language,
        warnings: &mut Vec<String>,
    ) -> Option<String> {
        if self.tables.embeds_strings() {
            return Some(normalize_spaces(&get_text(raw.node)).trim().to_string());
        }

        if let Some(node) = find_child(raw.node, language.code()) {
            return Some(get_text(node));
        }

        match find_child(raw.node, FALLBACK_LANGUAGE.code()) {
            Some(node) => {
                debug!(tag = raw.name, %language, "Using {FALLBACK_LANGUAGE} text");
                warnings.push(format!(
                    "Tag {} has no {language} text, using {FALLBACK_LANGUAGE}",
                    raw.name
                ));
                Some(get_text(node))
            }
            None => {
                warn!(tag = raw.name, %language, "String tag has no text for {language} or {FALLBACK_LANGUAGE}");
                warnings.push(format!(
                    "Tag {} has no {language} or {FALLBACK_LANGUAGE} text",
                    raw.name
                ));
                None
            }
        }
    }
}

/// Parse a numeric tag value as an integer; `1.5` is an error, not `1`.
fn parse_number(tag: &str, value: &str) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ExtractError::InvalidNumber {
            tag: tag.to_string(),
            value: value.to_string(),
        })
}
