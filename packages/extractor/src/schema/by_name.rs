//! Tables of the by-name schema generation.

use super::tables::{TagTables, ValueMap};
use super::SchemaGeneration;

pub static BY_NAME_TABLES: TagTables = TagTables {
    generation: SchemaGeneration::ByName,
    value_maps: &[
        ValueMap {
            tag: "CardSet",
            entries: &[
                (2, Some("Basic")),
                (3, Some("Expert")),
                (4, Some("Reward")),
                (5, Some("Missions")),
                (7, Some("System")),
                (8, Some("Debug")),
                (11, Some("Promotion")),
                (12, Some("Curse of Naxxramas")),
                (16, Some("Credits")),
            ],
        },
        ValueMap {
            tag: "CardType",
            entries: &[
                (3, Some("Hero")),
                (4, Some("Minion")),
                (5, Some("Spell")),
                (6, Some("Enchantment")),
                (7, Some("Weapon")),
                (10, Some("Hero Power")),
            ],
        },
        ValueMap {
            tag: "Faction",
            entries: &[(1, Some("Horde")), (2, Some("Alliance")), (3, Some("Neutral"))],
        },
        ValueMap {
            tag: "Rarity",
            entries: &[
                (0, None),
                (1, Some("Common")),
                (2, Some("Free")),
                (3, Some("Rare")),
                (4, Some("Epic")),
                (5, Some("Legendary")),
            ],
        },
        ValueMap {
            tag: "Race",
            entries: &[
                (14, Some("Murloc")),
                (15, Some("Demon")),
                (20, Some("Beast")),
                (21, Some("Totem")),
                (23, Some("Pirate")),
                (24, Some("Dragon")),
            ],
        },
        ValueMap {
            tag: "Class",
            entries: &[
                (0, None),
                (2, Some("Druid")),
                (3, Some("Hunter")),
                (4, Some("Mage")),
                (5, Some("Paladin")),
                (6, Some("Priest")),
                (7, Some("Rogue")),
                (8, Some("Shaman")),
                (9, Some("Warlock")),
                (10, Some("Warrior")),
                (11, Some("Dream")),
            ],
        },
    ],
    enum_ids: &[],
    bool_tags: &[],
};
