//! Schema generations of the card XML and their lookup tables.
//!
//! Three document shapes have been observed over time:
//!
//! - [`SchemaGeneration::ByName`]: `<Entity><Tag name="CardSet" type="Number" value="3"/>`,
//!   strings stored per language as `<Tag ...><enUS>..</enUS></Tag>`.
//! - [`SchemaGeneration::ByEnumId`]: `<Entity version="2"><Tag enumID="183" type="" value="3"/>`,
//!   one document per language with strings embedded directly in the tag.
//! - [`SchemaGeneration::DbfField`]: `<Dbf><Record><Field column="name">..</Field></Record></Dbf>`,
//!   used for card backs.
//!
//! The code tables of the first two generations overlap but are not
//! interchangeable (`CardSet` 3 is "Expert" in one and "Classic" in the
//! other), so each generation owns its own [`TagTables`].

mod by_enum;
mod by_name;
mod tables;

use std::fmt;

use roxmltree::Node;

use crate::error::{ExtractError, Result};
use crate::xml::{find_children, get_tag_name, has_tag};

pub use by_enum::BY_ENUM_ID_TABLES;
pub use by_name::BY_NAME_TABLES;
pub use tables::{TagTables, ValueMap};

/// Root element of card back documents.
pub const DBF_ROOT: &str = "Dbf";

/// Element holding one card.
pub const ENTITY_TAG: &str = "Entity";

/// Element holding one tag of a card.
pub const TAG_ELEMENT: &str = "Tag";

/// The shape of a source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaGeneration {
    /// Tags located by their `name` attribute.
    ByName,
    /// Tags located by their numeric `enumID` attribute.
    ByEnumId,
    /// `Field` records located by their `column` attribute.
    DbfField,
}

impl SchemaGeneration {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ByName => "by-name",
            Self::ByEnumId => "by-enum-id",
            Self::DbfField => "dbf-field",
        }
    }

    /// Whether documents of this generation hold text in one language only,
    /// embedded directly in their string tags.
    #[must_use]
    pub fn embeds_strings(&self) -> bool {
        matches!(self, Self::ByEnumId)
    }

    /// Lookup tables for entity-based generations.
    #[must_use]
    pub fn tables(&self) -> Option<&'static TagTables> {
        match self {
            Self::ByName => Some(&BY_NAME_TABLES),
            Self::ByEnumId => Some(&BY_ENUM_ID_TABLES),
            Self::DbfField => None,
        }
    }

    /// Detect the generation of a document from its root element.
    ///
    /// # Errors
    /// `UnsupportedDocument` if the root is neither `Dbf`, an `Entity`, nor a
    /// container of `Entity` elements.
    pub fn detect(root: Node<'_, '_>) -> Result<Self> {
        if has_tag(root, DBF_ROOT) {
            return Ok(Self::DbfField);
        }

        let entities = entity_nodes(root);
        if entities.is_empty() && !has_tag(root, ENTITY_TAG) {
            return Err(ExtractError::UnsupportedDocument {
                root: get_tag_name(root).to_string(),
            });
        }

        let enum_based = entities.iter().any(|entity| {
            entity
                .attribute("version")
                .and_then(|v| v.parse::<u32>().ok())
                .is_some_and(|v| v >= 2)
                || find_children(*entity, TAG_ELEMENT).any(|tag| tag.has_attribute("enumID"))
        });

        Ok(if enum_based { Self::ByEnumId } else { Self::ByName })
    }
}

impl fmt::Display for SchemaGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity elements of a document: the root itself, or its `Entity` children.
#[must_use]
pub fn entity_nodes<'a, 'input>(root: Node<'a, 'input>) -> Vec<Node<'a, 'input>> {
    if has_tag(root, ENTITY_TAG) {
        vec![root]
    } else {
        find_children(root, ENTITY_TAG).collect()
    }
}
