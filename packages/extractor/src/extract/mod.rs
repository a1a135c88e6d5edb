//! Input adapters turning a parsed document into records.
//!
//! Each schema generation has one adapter; the adapter is picked once per
//! document by inspecting its root element, and all of them feed the same
//! canonical record types.

mod card_back;
mod entity;

use roxmltree::Document;
use tracing::debug;

use crate::error::Result;
use crate::language::Language;
use crate::schema::{entity_nodes, SchemaGeneration, BY_ENUM_ID_TABLES, BY_NAME_TABLES};
use crate::types::{CardBackRecord, CardRecord, Extraction};
use crate::xml::find_children;

pub use card_back::{capitalize, split_how_to_get, CardBackExtractor, HOW_TO_GET_SEPARATOR};
pub use entity::EntityExtractor;

/// Element holding one card back.
pub const RECORD_ELEMENT: &str = "Record";

/// Records produced by an adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted {
    Cards(Extraction<CardRecord>),
    CardBacks(Extraction<CardBackRecord>),
}

/// The adapter for one schema generation.
#[derive(Debug, Clone, Copy)]
pub enum InputAdapter {
    ByName(EntityExtractor),
    ByEnumId(EntityExtractor),
    DbfField(CardBackExtractor),
}

impl InputAdapter {
    #[must_use]
    pub fn for_generation(generation: SchemaGeneration) -> Self {
        match generation {
            SchemaGeneration::ByName => Self::ByName(EntityExtractor::new(&BY_NAME_TABLES)),
            SchemaGeneration::ByEnumId => Self::ByEnumId(EntityExtractor::new(&BY_ENUM_ID_TABLES)),
            SchemaGeneration::DbfField => Self::DbfField(CardBackExtractor::new()),
        }
    }

    /// Select the adapter matching a document's shape.
    pub fn detect(doc: &Document<'_>) -> Result<Self> {
        SchemaGeneration::detect(doc.root_element()).map(Self::for_generation)
    }

    #[must_use]
    pub fn generation(&self) -> SchemaGeneration {
        match self {
            Self::ByName(_) => SchemaGeneration::ByName,
            Self::ByEnumId(_) => SchemaGeneration::ByEnumId,
            Self::DbfField(_) => SchemaGeneration::DbfField,
        }
    }

    /// Extract every record of `doc` in `language`, in document order.
    ///
    /// Stops at the first fatal error; no partial result is returned.
    pub fn extract(&self, doc: &Document<'_>, language: Language) -> Result<Extracted> {
        let root = doc.root_element();

        match self {
            Self::ByName(extractor) | Self::ByEnumId(extractor) => {
                let mut extraction = Extraction::new();
                for entity in entity_nodes(root) {
                    let (card, warnings) = extractor.extract(entity, language)?;
                    extraction.records.push(card);
                    extraction.warnings.extend(warnings);
                }
                debug!(
                    generation = %self.generation(),
                    %language,
                    cards = extraction.records.len(),
                    "Extracted cards"
                );
                Ok(Extracted::Cards(extraction))
            }
            Self::DbfField(extractor) => {
                let records = find_children(root, RECORD_ELEMENT)
                    .map(|record| extractor.extract(record, language))
                    .collect::<Result<Vec<_>>>()?;
                debug!(%language, card_backs = records.len(), "Extracted card backs");
                Ok(Extracted::CardBacks(Extraction {
                    records,
                    warnings: Vec::new(),
                }))
            }
        }
    }
}

/// Parse `xml`, detect its generation and extract it in `language`.
///
/// # Examples
/// ```
/// use cardjson_extractor::extract::{extract_document, Extracted};
/// use cardjson_extractor::Language;
///
/// let xml = r#"<Entity CardID="CS2_231">
///     <Tag name="CardName" type="String"><enUS>Wisp</enUS></Tag>
///     <Tag name="Cost" type="Number" value="0"/>
/// </Entity>"#;
///
/// let Extracted::Cards(cards) = extract_document(xml, Language::EnUs).unwrap() else {
///     panic!("expected cards");
/// };
/// assert_eq!(cards.records[0].name.as_deref(), Some("Wisp"));
/// ```
pub fn extract_document(xml: &str, language: Language) -> Result<Extracted> {
    let doc = Document::parse(xml)?;
    InputAdapter::detect(&doc)?.extract(&doc, language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;

    #[test]
    fn test_container_of_entities() {
        let xml = r#"<CardDefs>
            <Entity CardID="A"><Tag name="Cost" type="Number" value="1"/></Entity>
            <Entity CardID="B"><Tag name="Spooky" type="Bool" value="1"/></Entity>
        </CardDefs>"#;
        let Extracted::Cards(cards) = extract_document(xml, Language::EnUs).unwrap() else {
            panic!("expected cards");
        };
        let ids: Vec<&str> = cards.records.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["A", "B"]);
        assert_eq!(cards.warnings.len(), 1);
    }

    #[test]
    fn test_dbf_document() {
        let xml = r#"<Dbf>
            <Column name="ID" type="Int"/>
            <Record><Field column="ID">0</Field></Record>
            <Record><Field column="ID">1</Field></Record>
        </Dbf>"#;
        let Extracted::CardBacks(backs) = extract_document(xml, Language::EnUs).unwrap() else {
            panic!("expected card backs");
        };
        assert_eq!(backs.records.len(), 2);
        assert_eq!(backs.records[1].id, Some(1));
    }

    #[test]
    fn test_fatal_error_aborts_document() {
        let xml = r#"<CardDefs>
            <Entity CardID="A"><Tag enumID="48" type="" value="1"/></Entity>
            <Entity CardID="B"><Tag enumID="9001" type="" value="1"/></Entity>
        </CardDefs>"#;
        let err = extract_document(xml, Language::EnUs).unwrap_err();
        assert!(matches!(err, ExtractError::UnknownEnumCode { card, .. } if card == "B"));
    }

    #[test]
    fn test_malformed_xml() {
        let err = extract_document("<Entity", Language::EnUs).unwrap_err();
        assert!(matches!(err, ExtractError::XmlParse(_)));
    }
}
