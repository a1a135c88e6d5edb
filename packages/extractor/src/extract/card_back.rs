//! Card back extraction from DBF `Record` elements.

use roxmltree::Node;
use tracing::trace;

use crate::config::FALLBACK_LANGUAGE;
use crate::error::{ExtractError, Result};
use crate::fields::{CardBackField, ColumnCoercion};
use crate::language::Language;
use crate::resolver::resolve_field;
use crate::types::CardBackRecord;
use crate::xml::{direct_text, find_child, get_text};

/// Escaped paragraph break separating a card back's description from its
/// acquisition text.
pub const HOW_TO_GET_SEPARATOR: &str = "\\n\\n";

/// Builds one [`CardBackRecord`] per DBF `Record` element.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardBackExtractor;

impl CardBackExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Extract one card back in `language`.
    ///
    /// # Errors
    /// `InvalidNumber` when the `id` column is not an integer.
    pub fn extract(&self, record: Node<'_, '_>, language: Language) -> Result<CardBackRecord> {
        let mut back = CardBackRecord::default();

        for target in CardBackField::ALL {
            let Some(field) = resolve_field(record, target.column()) else {
                trace!(column = target.column(), "Card back column absent");
                continue;
            };

            let text = localized_text(field, language);
            if text.is_empty() {
                continue;
            }
            set_column(&mut back, target, text)?;
        }

        if let Some(description) = back.description.take() {
            let (description, how_to_get) = split_how_to_get(&description);
            back.description = Some(description.to_string());
            back.how_to_get = how_to_get.map(str::to_string);
        }

        Ok(back)
    }
}

/// Text of a field for `language`: its language child node, else the
/// fallback language's node, else its own inline text.
///
/// Localized columns carry only child nodes, so a missing translation reads
/// the fallback language's node rather than the empty inline text.
fn localized_text(field: Node<'_, '_>, language: Language) -> String {
    find_child(field, language.code())
        .or_else(|| find_child(field, FALLBACK_LANGUAGE.code()))
        .map(get_text)
        .unwrap_or_else(|| direct_text(field))
}

fn set_column(back: &mut CardBackRecord, target: CardBackField, text: String) -> Result<()> {
    match target.coercion() {
        ColumnCoercion::Integer => {
            let id = text.parse::<i64>().map_err(|_| ExtractError::InvalidNumber {
                tag: target.column().to_string(),
                value: text.clone(),
            })?;
            back.id = Some(id);
        }
        ColumnCoercion::Boolean => back.enabled = Some(text.eq_ignore_ascii_case("true")),
        ColumnCoercion::Capitalize | ColumnCoercion::None => {
            let text = if target.coercion() == ColumnCoercion::Capitalize {
                capitalize(&text)
            } else {
                text
            };
            match target {
                CardBackField::Name => back.name = Some(text),
                CardBackField::Source => back.source_type = Some(text),
                CardBackField::SourceDescription => back.source = Some(text),
                CardBackField::Description => back.description = Some(text),
                CardBackField::Id | CardBackField::Enabled => {}
            }
        }
    }
    Ok(())
}

/// Upper-case the first letter and lower-case the rest.
///
/// # Examples
/// ```
/// use cardjson_extractor::extract::capitalize;
///
/// assert_eq!(capitalize("SEASON"), "Season");
/// assert_eq!(capitalize("fixed"), "Fixed");
/// assert_eq!(capitalize(""), "");
/// ```
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

/// Split a description at the first escaped paragraph break.
///
/// # Examples
/// ```
/// use cardjson_extractor::extract::split_how_to_get;
///
/// assert_eq!(
///     split_how_to_get(r"Legend of the Pandaren.\n\nEarned by reaching Rank 20."),
///     ("Legend of the Pandaren.", Some("Earned by reaching Rank 20."))
/// );
/// assert_eq!(split_how_to_get("Plain."), ("Plain.", None));
/// ```
#[must_use]
pub fn split_how_to_get(description: &str) -> (&str, Option<&str>) {
    match description.split_once(HOW_TO_GET_SEPARATOR) {
        Some((before, after)) => (before, Some(after)),
        None => (description, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use roxmltree::Document;

    const PANDARIA: &str = r#"<Record>
        <Field column="ID">4</Field>
        <Field column="DATA_REL_VERSION">100</Field>
        <Field column="NAME"><enUS>Pandaria</enUS><frFR>Pandarie</frFR></Field>
        <Field column="ENABLED">True</Field>
        <Field column="SOURCE">SEASON</Field>
        <Field column="SOURCE_DESCRIPTION"><enUS>FIXED</enUS></Field>
        <Field column="DESCRIPTION"><enUS>Legend of the Pandaren.\n\nEarned in Ranked Play, April 2014.</enUS></Field>
    </Record>"#;

    #[test]
    fn test_extract_card_back() {
        let doc = Document::parse(PANDARIA).unwrap();
        let back = CardBackExtractor::new()
            .extract(doc.root_element(), Language::EnUs)
            .unwrap();

        let expected = CardBackRecord {
            id: Some(4),
            name: Some("Pandaria".to_string()),
            enabled: Some(true),
            source_type: Some("Season".to_string()),
            source: Some("Fixed".to_string()),
            description: Some("Legend of the Pandaren.".to_string()),
            how_to_get: Some("Earned in Ranked Play, April 2014.".to_string()),
        };
        assert_eq!(back, expected);
    }

    #[test]
    fn test_language_child_and_fallback() {
        let doc = Document::parse(PANDARIA).unwrap();
        let extractor = CardBackExtractor::new();

        let fr = extractor.extract(doc.root_element(), Language::FrFr).unwrap();
        assert_eq!(fr.name.as_deref(), Some("Pandarie"));

        let de = extractor.extract(doc.root_element(), Language::DeDe).unwrap();
        assert_eq!(de.name.as_deref(), Some("Pandaria"));
    }

    #[test]
    fn test_enabled_false_and_no_split() {
        let xml = r#"<Record>
            <Field column="id">0</Field>
            <Field column="enabled">false</Field>
            <Field column="description">The classic card back.</Field>
        </Record>"#;
        let doc = Document::parse(xml).unwrap();
        let back = CardBackExtractor::new()
            .extract(doc.root_element(), Language::EnUs)
            .unwrap();

        assert_eq!(back.id, Some(0));
        assert_eq!(back.enabled, Some(false));
        assert_eq!(back.description.as_deref(), Some("The classic card back."));
        assert_eq!(back.how_to_get, None);
    }

    #[test]
    fn test_empty_field_is_omitted() {
        let xml = r#"<Record><Field column="name"></Field></Record>"#;
        let doc = Document::parse(xml).unwrap();
        let back = CardBackExtractor::new()
            .extract(doc.root_element(), Language::EnUs)
            .unwrap();
        assert_eq!(back, CardBackRecord::default());
    }

    #[test]
    fn test_invalid_id() {
        let xml = r#"<Record><Field column="id">four</Field></Record>"#;
        let doc = Document::parse(xml).unwrap();
        let err = CardBackExtractor::new()
            .extract(doc.root_element(), Language::EnUs)
            .unwrap_err();
        assert!(matches!(err, ExtractError::InvalidNumber { .. }));
    }
}
