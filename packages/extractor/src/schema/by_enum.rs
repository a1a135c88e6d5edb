//! Tables of the by-enum-ID schema generation.

use super::tables::{TagTables, ValueMap};
use super::SchemaGeneration;

pub static BY_ENUM_ID_TABLES: TagTables = TagTables {
    generation: SchemaGeneration::ByEnumId,
    value_maps: &[
        ValueMap {
            tag: "CardSet",
            entries: &[
                (2, Some("Basic")),
                (3, Some("Classic")),
                (4, Some("Reward")),
                (5, Some("Missions")),
                (7, Some("System")),
                (8, Some("Debug")),
                (11, Some("Promotion")),
                (12, Some("Curse of Naxxramas")),
                (13, Some("Goblins vs Gnomes")),
                (14, Some("Blackrock Mountain")),
                (15, Some("The Grand Tournament")),
                (16, Some("Credits")),
                (17, Some("Hero Skins")),
                (18, Some("Tavern Brawl")),
                (20, Some("League of Explorers")),
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
                (17, Some("Mech")),
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
                (12, None),
            ],
        },
    ],
    enum_ids: &[
        (32, "TriggerVisual"),
        (45, "Health"),
        (47, "Atk"),
        (48, "Cost"),
        (114, "Elite"),
        (183, "CardSet"),
        (184, "CardTextInHand"),
        (185, "CardName"),
        (187, "Durability"),
        (189, "Windfury"),
        (190, "Taunt"),
        (191, "Stealth"),
        (192, "Spellpower"),
        (194, "Divine Shield"),
        (197, "Charge"),
        (199, "Class"),
        (200, "Race"),
        (201, "Faction"),
        (202, "CardType"),
        (203, "Rarity"),
        (205, "Summoned"),
        (208, "Freeze"),
        (212, "Enrage"),
        (215, "Overload"),
        (217, "Deathrattle"),
        (218, "Battlecry"),
        (219, "Secret"),
        (220, "Combo"),
        (251, "AttackVisualType"),
        (252, "CardTextInPlay"),
        (268, "DevState"),
        (293, "Morph"),
        (321, "Collectible"),
        (325, "TargetingArrowText"),
        (330, "EnchantmentBirthVisual"),
        (331, "EnchantmentIdleVisual"),
        (335, "InvisibleDeathrattle"),
        (338, "OneTurnEffect"),
        (339, "Silence"),
        (342, "ArtistName"),
        (349, "ImmuneToSpellpower"),
        (350, "AdjacentBuff"),
        (351, "FlavorText"),
        (355, "GrantCharge"),
        (361, "HealTarget"),
        (362, "Aura"),
        (363, "Poisonous"),
        (364, "HowToGetThisCard"),
        (365, "HowToGetThisGoldCard"),
        (367, "AIMustPlay"),
        (370, "AffectedBySpellPower"),
    ],
    bool_tags: &[
        "Collectible",
        "Elite",
        "Windfury",
        "Combo",
        "Secret",
        "Battlecry",
        "Deathrattle",
        "Taunt",
        "Stealth",
        "Enrage",
        "Freeze",
        "Charge",
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
        "AIMustPlay",
        "InvisibleDeathrattle",
    ],
};
