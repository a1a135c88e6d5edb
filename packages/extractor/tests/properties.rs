//! Property tests for mechanics aggregation, cost repair and JSON output.

use cardjson_extractor::assemble::{fix_card, sort_by_name};
use cardjson_extractor::extract::{extract_document, Extracted};
use cardjson_extractor::fields::MECHANIC_TAGS;
use cardjson_extractor::{CardRecord, Language};
use proptest::prelude::*;

fn card_type() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(vec![
        "Minion", "Weapon", "Spell", "Hero", "Enchantment", "Hero Power",
    ]))
    .prop_map(|t| t.map(str::to_string))
}

fn card_record() -> impl Strategy<Value = CardRecord> {
    (
        "[A-Z]{2,4}[0-9]_[0-9]{3}",
        prop::option::of("[A-Za-zÀ-ÿ' ]{1,20}"),
        card_type(),
        prop::option::of(-1i64..12),
        prop::option::of(0i64..12),
        prop::option::of(any::<bool>()),
        prop::option::of(prop::collection::vec("[A-Za-z ]{1,12}", 1..4)),
    )
        .prop_map(|(id, name, card_type, cost, attack, collectible, mechanics)| CardRecord {
            id,
            name,
            set: Some("Expert".to_string()),
            card_type,
            cost,
            attack,
            collectible,
            mechanics,
            ..CardRecord::default()
        })
}

proptest! {
    #[test]
    fn mechanics_are_sorted_and_never_empty(flags in prop::collection::vec(any::<bool>(), MECHANIC_TAGS.len())) {
        let tags: String = MECHANIC_TAGS
            .iter()
            .zip(&flags)
            .map(|(tag, on)| format!(r#"<Tag name="{tag}" type="Bool" value="{}"/>"#, u8::from(*on)))
            .collect();
        let xml = format!(r#"<Entity CardID="X">{tags}</Entity>"#);

        let Ok(Extracted::Cards(cards)) = extract_document(&xml, Language::EnUs) else {
            panic!("expected cards");
        };
        let card = &cards.records[0];

        match &card.mechanics {
            None => prop_assert!(flags.iter().all(|on| !on)),
            Some(mechanics) => {
                prop_assert!(!mechanics.is_empty());
                prop_assert!(mechanics.windows(2).all(|w| w[0] < w[1]));
                prop_assert_eq!(mechanics.len(), flags.iter().filter(|on| **on).count());
            }
        }
    }

    #[test]
    fn repair_is_idempotent(mut cards in prop::collection::vec(card_record(), 0..20)) {
        for card in &mut cards {
            fix_card(card);
        }
        let once = cards.clone();
        for card in &mut cards {
            prop_assert!(!fix_card(card));
        }
        prop_assert_eq!(&cards, &once);

        for card in &cards {
            if matches!(card.card_type.as_deref(), Some("Minion" | "Weapon")) {
                prop_assert!(card.cost.is_some());
            }
        }
    }

    #[test]
    fn repair_leaves_other_types_untouched(card in card_record()) {
        let mut repaired = card.clone();
        fix_card(&mut repaired);
        if !matches!(card.card_type.as_deref(), Some("Minion" | "Weapon")) || card.cost.is_some() {
            prop_assert_eq!(repaired, card);
        } else {
            prop_assert_eq!(repaired.cost, Some(0));
        }
    }

    #[test]
    fn set_json_round_trips(mut cards in prop::collection::vec(card_record(), 0..20)) {
        sort_by_name(&mut cards);
        let json = serde_json::to_string(&cards).unwrap();
        let parsed: Vec<CardRecord> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, cards);
        prop_assert!(!json.contains(":null"));
    }
}
