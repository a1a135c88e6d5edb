//! Set assembly: grouping cards by set, repairing known omissions, and
//! sorting each set by name.

use std::collections::BTreeMap;

use tracing::{info, warn};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::language::Language;
use crate::types::{CardRecord, Extraction};

/// Card types that always have a cost, even when the source omits it.
pub const COSTED_TYPES: &[&str] = &["Minion", "Weapon"];

/// Cards of one language grouped by set name.
pub type SetMap = BTreeMap<String, Vec<CardRecord>>;

/// The sets of one language, with the non-fatal findings of assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssembledSets {
    pub sets: SetMap,
    pub warnings: Vec<String>,
}

impl AssembledSets {
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.sets.values().map(Vec::len).sum()
    }

    /// Sorted set names.
    pub fn set_names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }
}

/// Groups, repairs and sorts extracted cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetAssembler;

impl SetAssembler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Assemble the cards of one language into sorted sets.
    ///
    /// Cards without a set cannot be placed in any output file; they are
    /// skipped and reported as warnings.
    pub fn assemble(&self, extraction: Extraction<CardRecord>, language: Language) -> AssembledSets {
        let mut assembled = AssembledSets {
            sets: SetMap::new(),
            warnings: extraction.warnings,
        };

        for mut card in extraction.records {
            let Some(set) = card.set.clone() else {
                warn!(card = %card.id, %language, "Card has no set, skipping");
                assembled
                    .warnings
                    .push(format!("Card {} has no set, skipping", card.id));
                continue;
            };

            if fix_card(&mut card) {
                assembled
                    .warnings
                    .push(format!("Fixed missing cost for {} ({})", card.display_name(), card.id));
            }
            assembled.sets.entry(set).or_default().push(card);
        }

        for cards in assembled.sets.values_mut() {
            sort_by_name(cards);
        }

        info!(
            %language,
            sets = assembled.sets.len(),
            cards = assembled.card_count(),
            "Assembled sets"
        );
        assembled
    }
}

/// Apply the repair rules to one card. Returns whether anything changed.
///
/// A minion or weapon without a cost gets cost 0. Applying it twice is the
/// same as applying it once.
///
/// # Examples
/// ```
/// use cardjson_extractor::assemble::fix_card;
/// use cardjson_extractor::CardRecord;
///
/// let mut card = CardRecord::new("EX1_029");
/// card.card_type = Some("Minion".to_string());
///
/// assert!(fix_card(&mut card));
/// assert_eq!(card.cost, Some(0));
/// assert!(!fix_card(&mut card));
/// ```
pub fn fix_card(card: &mut CardRecord) -> bool {
    let costed = card
        .card_type
        .as_deref()
        .is_some_and(|t| COSTED_TYPES.contains(&t));

    if costed && card.cost.is_none() {
        info!(card = %card.id, name = card.display_name(), "Fixing missing cost");
        card.cost = Some(0);
        return true;
    }
    false
}

/// Locale-independent sort key for a card name: accents stripped,
/// lower-cased.
///
/// # Examples
/// ```
/// use cardjson_extractor::assemble::collation_key;
///
/// assert_eq!(collation_key("Élémentaire"), "elementaire");
/// assert_eq!(collation_key("Ragnaros"), "ragnaros");
/// ```
#[must_use]
pub fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Stable sort by collation key, then raw name, then id.
pub fn sort_by_name(cards: &mut [CardRecord]) {
    cards.sort_by_cached_key(|card| {
        let name = card.name.clone().unwrap_or_default();
        (collation_key(&name), name, card.id.clone())
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn card(id: &str, name: &str, set: &str, card_type: &str, cost: Option<i64>) -> CardRecord {
        CardRecord {
            id: id.to_string(),
            name: Some(name.to_string()),
            set: Some(set.to_string()),
            card_type: Some(card_type.to_string()),
            cost,
            ..CardRecord::default()
        }
    }

    fn names(cards: &[CardRecord]) -> Vec<&str> {
        cards.iter().map(CardRecord::display_name).collect()
    }

    #[test]
    fn test_groups_by_set() {
        let extraction = Extraction {
            records: vec![
                card("CS2_231", "Wisp", "Expert", "Minion", Some(0)),
                card("CS2_189", "Elven Archer", "Basic", "Minion", Some(1)),
                card("EX1_001", "Lightwarden", "Expert", "Minion", Some(1)),
            ],
            warnings: Vec::new(),
        };
        let assembled = SetAssembler::new().assemble(extraction, Language::EnUs);

        assert_eq!(assembled.set_names().collect::<Vec<_>>(), ["Basic", "Expert"]);
        assert_eq!(names(&assembled.sets["Expert"]), ["Lightwarden", "Wisp"]);
        assert_eq!(assembled.card_count(), 3);
    }

    #[test]
    fn test_missing_cost_repaired() {
        let extraction = Extraction {
            records: vec![
                card("A", "Alpha", "Basic", "Minion", None),
                card("B", "Beta", "Basic", "Minion", Some(3)),
                card("C", "Gamma", "Basic", "Weapon", None),
                card("D", "Delta", "Basic", "Enchantment", None),
            ],
            warnings: Vec::new(),
        };
        let assembled = SetAssembler::new().assemble(extraction, Language::EnUs);
        let costs: Vec<(&str, Option<i64>)> = assembled.sets["Basic"]
            .iter()
            .map(|c| (c.id.as_str(), c.cost))
            .collect();

        assert_eq!(
            costs,
            [("A", Some(0)), ("B", Some(3)), ("D", None), ("C", Some(0))]
        );
        assert_eq!(assembled.warnings.len(), 2);
    }

    #[test]
    fn test_card_without_set_is_skipped() {
        let mut orphan = card("GAME_005", "The Coin", "", "Spell", Some(0));
        orphan.set = None;
        let extraction = Extraction {
            records: vec![orphan],
            warnings: vec!["earlier".to_string()],
        };
        let assembled = SetAssembler::new().assemble(extraction, Language::EnUs);

        assert!(assembled.sets.is_empty());
        assert_eq!(
            assembled.warnings,
            ["earlier", "Card GAME_005 has no set, skipping"]
        );
    }

    #[test]
    fn test_accented_names_sort_with_plain_letters() {
        let mut cards = vec![
            card("1", "Zombie", "S", "Minion", Some(1)),
            card("2", "Élémentaire de feu", "S", "Minion", Some(6)),
            card("3", "ecuyer", "S", "Minion", Some(1)),
            card("4", "Abomination", "S", "Minion", Some(5)),
        ];
        sort_by_name(&mut cards);
        assert_eq!(
            names(&cards),
            ["Abomination", "ecuyer", "Élémentaire de feu", "Zombie"]
        );
    }

    #[test]
    fn test_equal_names_ordered_by_id() {
        let mut cards = vec![
            card("EX1_b", "Treant", "S", "Minion", Some(1)),
            card("EX1_a", "Treant", "S", "Minion", Some(1)),
        ];
        sort_by_name(&mut cards);
        let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["EX1_a", "EX1_b"]);
    }
}
