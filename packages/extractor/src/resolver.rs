//! Tag resolution: locating the node that carries a field's raw value.

use roxmltree::Node;

use crate::error::{ExtractError, Result};
use crate::fields::is_known_tag;
use crate::schema::{SchemaGeneration, TagTables, TAG_ELEMENT};
use crate::xml::{element_children, find_child_by_attribute, has_tag};

/// Element holding one column of a DBF record.
pub const FIELD_ELEMENT: &str = "Field";

/// Declared type of a tag, from its `type` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredType {
    String,
    Number,
    Bool,
    /// Empty `type` attribute; the kind is inferred from the tag name.
    Untyped,
    Other(String),
}

impl DeclaredType {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "String" => Self::String,
            "Number" => Self::Number,
            "Bool" => Self::Bool,
            "" => Self::Untyped,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "String",
            Self::Number => "Number",
            Self::Bool => "Bool",
            Self::Untyped => "",
            Self::Other(raw) => raw,
        }
    }
}

/// A located tag node with its declared type and raw value.
#[derive(Debug, Clone)]
pub struct RawTag<'a, 'input> {
    /// Human tag name, e.g. `CardSet`.
    pub name: &'static str,
    pub node: Node<'a, 'input>,
    pub declared_type: DeclaredType,
    /// The `value` attribute, if any. String tags carry text instead.
    pub value: Option<&'a str>,
}

/// Classification of one `Tag` child of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagClass<'a> {
    Known(&'static str),
    /// A by-name tag that is not in the known set. Non-fatal.
    UnknownName(&'a str),
}

/// Locates tags in an entity according to one schema generation.
#[derive(Debug, Clone, Copy)]
pub struct TagResolver {
    tables: &'static TagTables,
}

impl TagResolver {
    #[must_use]
    pub fn new(tables: &'static TagTables) -> Self {
        Self { tables }
    }

    #[must_use]
    pub fn tables(&self) -> &'static TagTables {
        self.tables
    }

    /// Locate the tag `name` in `entity`.
    ///
    /// Returns `None` when the tag is absent, or when the name has no code
    /// in an enum-based generation (such a tag cannot appear in the document).
    pub fn resolve<'a, 'input>(
        &self,
        entity: Node<'a, 'input>,
        name: &'static str,
    ) -> Option<RawTag<'a, 'input>> {
        let node = match self.tables.generation {
            SchemaGeneration::ByEnumId => {
                let id = self.tables.enum_id(name)?;
                find_child_by_attribute(entity, TAG_ELEMENT, "enumID", |v| {
                    v.trim().parse::<u32>().ok() == Some(id)
                })?
            }
            SchemaGeneration::ByName | SchemaGeneration::DbfField => {
                find_child_by_attribute(entity, TAG_ELEMENT, "name", |v| v == name)?
            }
        };

        Some(RawTag {
            name,
            node,
            declared_type: DeclaredType::parse(node.attribute("type").unwrap_or_default()),
            value: node.attribute("value"),
        })
    }

    /// Classify a `Tag` child of an entity by its discriminator.
    ///
    /// # Errors
    /// `UnknownEnumCode` for an `enumID` absent from the generation's table.
    /// Unknown codes are fatal: a new field must be classified before the
    /// data can be trusted.
    pub fn classify<'a>(&self, tag: Node<'a, '_>, card: &str) -> Result<TagClass<'a>> {
        match self.tables.generation {
            SchemaGeneration::ByEnumId => {
                let code = tag.attribute("enumID").unwrap_or_default();
                code.trim()
                    .parse::<u32>()
                    .ok()
                    .and_then(|id| self.tables.tag_for_enum_id(id))
                    .map(TagClass::Known)
                    .ok_or_else(|| ExtractError::UnknownEnumCode {
                        code: code.to_string(),
                        card: card.to_string(),
                    })
            }
            SchemaGeneration::ByName | SchemaGeneration::DbfField => {
                let name = tag.attribute("name").unwrap_or_default();
                Ok(known_tag_name(name)
                    .map(TagClass::Known)
                    .unwrap_or(TagClass::UnknownName(name)))
            }
        }
    }

    /// Classify every `Tag` child of an entity.
    pub fn classify_all<'a>(&self, entity: Node<'a, '_>, card: &str) -> Result<Vec<TagClass<'a>>> {
        element_children(entity)
            .filter(|child| has_tag(*child, TAG_ELEMENT))
            .map(|tag| self.classify(tag, card))
            .collect()
    }
}

/// Static tag name for a known tag.
fn known_tag_name(name: &str) -> Option<&'static str> {
    use crate::fields::{CardField, IGNORED_TAGS, MECHANIC_TAGS};

    if !is_known_tag(name) {
        return None;
    }
    CardField::from_tag_name(name)
        .map(|f| f.tag_name())
        .or_else(|| MECHANIC_TAGS.iter().copied().find(|t| *t == name))
        .or_else(|| IGNORED_TAGS.iter().copied().find(|t| *t == name))
}

/// Locate the DBF `Field` child whose `column` equals `column`, ignoring case.
pub fn resolve_field<'a, 'input>(record: Node<'a, 'input>, column: &str) -> Option<Node<'a, 'input>> {
    find_child_by_attribute(record, FIELD_ELEMENT, "column", |v| {
        v.eq_ignore_ascii_case(column)
    })
}
