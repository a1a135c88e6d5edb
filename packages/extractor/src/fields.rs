//! Known field identifiers.
//!
//! Tag and column names are resolved through these closed enumerations so an
//! unknown identifier surfaces as a reported variant instead of a silently
//! missing property.

/// A canonical card field and the source tag it is resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardField {
    Id,
    Name,
    Set,
    Type,
    Faction,
    Rarity,
    Cost,
    Attack,
    Health,
    Durability,
    Text,
    InPlayText,
    Flavor,
    Artist,
    Collectible,
    Elite,
    Race,
    PlayerClass,
    HowToGet,
    HowToGetGold,
}

/// Primitive kind a field's value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Bool,
}

impl FieldKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Number => "number",
            Self::Bool => "boolean",
        }
    }
}

impl CardField {
    /// All card fields, in output order.
    pub const ALL: [CardField; 20] = [
        Self::Id,
        Self::Name,
        Self::Set,
        Self::Type,
        Self::Faction,
        Self::Rarity,
        Self::Cost,
        Self::Attack,
        Self::Health,
        Self::Durability,
        Self::Text,
        Self::InPlayText,
        Self::Flavor,
        Self::Artist,
        Self::Collectible,
        Self::Elite,
        Self::Race,
        Self::PlayerClass,
        Self::HowToGet,
        Self::HowToGetGold,
    ];

    /// Name of the source tag.
    #[must_use]
    pub fn tag_name(&self) -> &'static str {
        match self {
            Self::Id => "CardID",
            Self::Name => "CardName",
            Self::Set => "CardSet",
            Self::Type => "CardType",
            Self::Faction => "Faction",
            Self::Rarity => "Rarity",
            Self::Cost => "Cost",
            Self::Attack => "Atk",
            Self::Health => "Health",
            Self::Durability => "Durability",
            Self::Text => "CardTextInHand",
            Self::InPlayText => "CardTextInPlay",
            Self::Flavor => "FlavorText",
            Self::Artist => "ArtistName",
            Self::Collectible => "Collectible",
            Self::Elite => "Elite",
            Self::Race => "Race",
            Self::PlayerClass => "Class",
            Self::HowToGet => "HowToGetThisCard",
            Self::HowToGetGold => "HowToGetThisGoldCard",
        }
    }

    /// Key of the field in the serialized record.
    #[must_use]
    pub fn json_key(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Set => "set",
            Self::Type => "type",
            Self::Faction => "faction",
            Self::Rarity => "rarity",
            Self::Cost => "cost",
            Self::Attack => "attack",
            Self::Health => "health",
            Self::Durability => "durability",
            Self::Text => "text",
            Self::InPlayText => "inPlayText",
            Self::Flavor => "flavor",
            Self::Artist => "artist",
            Self::Collectible => "collectible",
            Self::Elite => "elite",
            Self::Race => "race",
            Self::PlayerClass => "playerClass",
            Self::HowToGet => "howToGet",
            Self::HowToGetGold => "howToGetGold",
        }
    }

    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Cost | Self::Attack | Self::Health | Self::Durability => FieldKind::Number,
            Self::Collectible | Self::Elite => FieldKind::Bool,
            _ => FieldKind::Text,
        }
    }

    /// Look up the field resolved from a source tag.
    #[must_use]
    pub fn from_tag_name(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.tag_name() == tag)
    }
}

/// Boolean gameplay flags aggregated into a card's `mechanics`.
pub const MECHANIC_TAGS: &[&str] = &[
    "Windfury",
    "Combo",
    "Secret",
    "Battlecry",
    "Deathrattle",
    "Taunt",
    "Stealth",
    "Spellpower",
    "Enrage",
    "Freeze",
    "Charge",
    "Overload",
    "Divine Shield",
    "Silence",
    "Morph",
    "OneTurnEffect",
    "Poisonous",
    "Aura",
    "AdjacentBuff",
    "HealTarget",
    "GrantCharge",
    "ImmuneToSpellpower",
    "AffectedBySpellPower",
    "Summoned",
];

/// Tags that are known but intentionally not extracted.
pub const IGNORED_TAGS: &[&str] = &[
    "AttackVisualType",
    "EnchantmentBirthVisual",
    "EnchantmentIdleVisual",
    "TargetingArrowText",
    "DevState",
    "TriggerVisual",
    "Recall",
    "AIMustPlay",
    "InvisibleDeathrattle",
];

/// Whether a tag name is used, ignored or a mechanic.
#[must_use]
pub fn is_known_tag(tag: &str) -> bool {
    CardField::from_tag_name(tag).is_some()
        || MECHANIC_TAGS.contains(&tag)
        || IGNORED_TAGS.contains(&tag)
}

/// Optional transformation applied to a card back column value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnCoercion {
    /// Keep the text as-is.
    None,
    /// Upper-case the first letter, lower-case the rest.
    Capitalize,
    /// `true` (case-insensitive) is true, anything else false.
    Boolean,
    /// Integer literal.
    Integer,
}

/// A card back DBF column and the record attribute it populates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardBackField {
    Id,
    Name,
    Enabled,
    Source,
    SourceDescription,
    Description,
}

impl CardBackField {
    pub const ALL: [CardBackField; 6] = [
        Self::Id,
        Self::Name,
        Self::Enabled,
        Self::Source,
        Self::SourceDescription,
        Self::Description,
    ];

    /// DBF `column` attribute value (compared case-insensitively).
    #[must_use]
    pub fn column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Enabled => "enabled",
            Self::Source => "source",
            Self::SourceDescription => "source_description",
            Self::Description => "description",
        }
    }

    /// Key of the attribute in the serialized card back.
    #[must_use]
    pub fn json_key(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Enabled => "enabled",
            Self::Source => "sourceType",
            Self::SourceDescription => "source",
            Self::Description => "description",
        }
    }

    #[must_use]
    pub fn coercion(&self) -> ColumnCoercion {
        match self {
            Self::Id => ColumnCoercion::Integer,
            Self::Enabled => ColumnCoercion::Boolean,
            Self::Source | Self::SourceDescription => ColumnCoercion::Capitalize,
            Self::Name | Self::Description => ColumnCoercion::None,
        }
    }

    #[must_use]
    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.column().eq_ignore_ascii_case(column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names_unique() {
        let mut names: Vec<&str> = CardField::ALL.iter().map(CardField::tag_name).collect();
        names.extend(MECHANIC_TAGS);
        names.extend(IGNORED_TAGS);
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_field_lookup() {
        assert_eq!(CardField::from_tag_name("Atk"), Some(CardField::Attack));
        assert_eq!(CardField::from_tag_name("Class"), Some(CardField::PlayerClass));
        assert_eq!(CardField::from_tag_name("Taunt"), None);
        assert_eq!(CardField::PlayerClass.json_key(), "playerClass");
        assert_eq!(CardField::Durability.kind(), FieldKind::Number);
        assert_eq!(CardField::Elite.kind(), FieldKind::Bool);
    }

    #[test]
    fn test_known_tags() {
        assert!(is_known_tag("CardName"));
        assert!(is_known_tag("Divine Shield"));
        assert!(is_known_tag("DevState"));
        assert!(!is_known_tag("Inspire"));
    }

    #[test]
    fn test_card_back_columns() {
        assert_eq!(
            CardBackField::from_column("SOURCE_DESCRIPTION"),
            Some(CardBackField::SourceDescription)
        );
        assert_eq!(CardBackField::Source.json_key(), "sourceType");
        assert_eq!(CardBackField::SourceDescription.json_key(), "source");
        assert_eq!(CardBackField::Id.coercion(), ColumnCoercion::Integer);
        assert_eq!(CardBackField::from_column("note_desc"), None);
    }
}
