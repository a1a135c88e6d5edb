//! Static lookup tables for one schema generation.

use super::SchemaGeneration;

/// Maps the raw integer codes of one enumerated tag to domain strings.
///
/// A code mapped to `None` is a deliberate "no value" (e.g. rarity 0):
/// the field is omitted. A code absent from the map is unknown.
#[derive(Debug)]
pub struct ValueMap {
    pub tag: &'static str,
    pub entries: &'static [(i64, Option<&'static str>)],
}

impl ValueMap {
    /// Look up a code. `None` means the code is not in the map.
    #[must_use]
    pub fn lookup(&self, code: i64) -> Option<Option<&'static str>> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, value)| *value)
    }
}

/// Immutable lookup tables of one schema generation.
#[derive(Debug)]
pub struct TagTables {
    pub generation: SchemaGeneration,
    /// Per-tag value maps for enumerated tags.
    pub value_maps: &'static [ValueMap],
    /// Numeric tag codes and the tag names they stand for. Empty for
    /// generations that locate tags by name.
    pub enum_ids: &'static [(u32, &'static str)],
    /// Tags whose untyped (`type=""`) values are booleans; other untyped
    /// values are numbers.
    pub bool_tags: &'static [&'static str],
}

impl TagTables {
    /// Value map of an enumerated tag.
    #[must_use]
    pub fn value_map(&self, tag: &str) -> Option<&ValueMap> {
        self.value_maps.iter().find(|m| m.tag == tag)
    }

    /// Numeric code of a tag name.
    #[must_use]
    pub fn enum_id(&self, tag: &str) -> Option<u32> {
        self.enum_ids
            .iter()
            .find(|(_, name)| *name == tag)
            .map(|(id, _)| *id)
    }

    /// Tag name of a numeric code.
    #[must_use]
    pub fn tag_for_enum_id(&self, id: u32) -> Option<&'static str> {
        self.enum_ids
            .iter()
            .find(|(code, _)| *code == id)
            .map(|(_, name)| *name)
    }

    #[must_use]
    pub fn is_bool_tag(&self, tag: &str) -> bool {
        self.bool_tags.contains(&tag)
    }

    /// Whether string tags embed their text directly instead of in
    /// per-language child nodes.
    #[must_use]
    pub fn embeds_strings(&self) -> bool {
        self.generation.embeds_strings()
    }
}
