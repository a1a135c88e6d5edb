//! Card entity extraction.

use roxmltree::Node;
use tracing::{error, warn};

use crate::coerce::{TagValue, ValueCoercer};
use crate::error::{ExtractError, Result};
use crate::fields::{CardField, FieldKind, MECHANIC_TAGS};
use crate::language::Language;
use crate::resolver::{TagClass, TagResolver};
use crate::schema::{SchemaGeneration, TagTables};
use crate::types::CardRecord;

/// Builds one [`CardRecord`] per `Entity` element.
#[derive(Debug, Clone, Copy)]
pub struct EntityExtractor {
    resolver: TagResolver,
    coercer: ValueCoercer,
}

impl EntityExtractor {
    #[must_use]
    pub fn new(tables: &'static TagTables) -> Self {
        Self {
            resolver: TagResolver::new(tables),
            coercer: ValueCoercer::new(tables),
        }
    }

    #[must_use]
    pub fn generation(&self) -> SchemaGeneration {
        self.resolver.tables().generation
    }

    /// Extract one card in `language`.
    ///
    /// Returns the record and any non-fatal warnings: unknown tag names and
    /// string tags read from the fallback language.
    ///
    /// # Errors
    /// Fails on unknown enum codes or values, unhandled declared types and
    /// values that do not fit their field.
    pub fn extract(
        &self,
        entity: Node<'_, '_>,
        language: Language,
    ) -> Result<(CardRecord, Vec<String>)> {
        let mut fallbacks = Vec::new();
        let id = self.card_id(entity, language, &mut fallbacks)?;
        let mut warnings = Vec::new();

        for class in self.resolver.classify_all(entity, &id)? {
            if let TagClass::UnknownName(name) = class {
                warn!(card = %id, "New Tag name [{name}]");
                warnings.push(format!("New Tag name [{name}] for card: {id}"));
            }
        }

        let mut card = CardRecord::new(id);
        self.fill_fields(entity, language, &mut card, &mut fallbacks)
            .inspect_err(|e| error!(card = %card.id, "Error for card: {e}"))?;

        warnings.extend(
            fallbacks
                .into_iter()
                .map(|warning| format!("{warning} for card: {}", card.id)),
        );
        Ok((card, warnings))
    }

    /// Card identifier from the `CardID` attribute, else the `CardID` tag.
    fn card_id(
        &self,
        entity: Node<'_, '_>,
        language: Language,
        warnings: &mut Vec<String>,
    ) -> Result<String> {
        if let Some(id) = entity.attribute("CardID").map(str::trim).filter(|s| !s.is_empty()) {
            return Ok(id.to_string());
        }

        let missing = || ExtractError::MissingElement {
            element: "CardID".to_string(),
            context: "Entity".to_string(),
        };
        let raw = self
            .resolver
            .resolve(entity, CardField::Id.tag_name())
            .ok_or_else(missing)?;
        match self.coercer.coerce(&raw, language, warnings)? {
            Some(TagValue::Text(id)) if !id.is_empty() => Ok(id),
            _ => Err(missing()),
        }
    }

    fn fill_fields(
        &self,
        entity: Node<'_, '_>,
        language: Language,
        card: &mut CardRecord,
        warnings: &mut Vec<String>,
    ) -> Result<()> {
        for field in CardField::ALL {
            if field == CardField::Id {
                continue;
            }
            let Some(raw) = self.resolver.resolve(entity, field.tag_name()) else {
                continue;
            };
            if let Some(value) = self.coercer.coerce(&raw, language, warnings)? {
                assign(card, field, value)?;
            }
        }

        let mut mechanics = Vec::new();
        for &tag in MECHANIC_TAGS {
            let Some(raw) = self.resolver.resolve(entity, tag) else {
                continue;
            };
            if self
                .coercer
                .coerce(&raw, language, warnings)?
                .is_some_and(|v| v.is_truthy())
            {
                mechanics.push(tag.to_string());
            }
        }
        mechanics.sort();
        card.mechanics = (!mechanics.is_empty()).then_some(mechanics);

        Ok(())
    }
}

/// Store a coerced value in its field.
fn assign(card: &mut CardRecord, field: CardField, value: TagValue) -> Result<()> {
    let mismatch = |found: FieldKind| ExtractError::FieldTypeMismatch {
        tag: field.tag_name().to_string(),
        field: field.json_key(),
        expected: field.kind().as_str(),
        found: found.as_str(),
    };
    let found = value.kind();

    match value {
        TagValue::Text(text) => *text_slot(card, field).ok_or_else(|| mismatch(found))? = Some(text),
        TagValue::Number(n) => *number_slot(card, field).ok_or_else(|| mismatch(found))? = Some(n),
        TagValue::Bool(b) => *bool_slot(card, field).ok_or_else(|| mismatch(found))? = Some(b),
    }
    Ok(())
}

fn text_slot(card: &mut CardRecord, field: CardField) -> Option<&mut Option<String>> {
    match field {
        CardField::Name => Some(&mut card.name),
        CardField::Set => Some(&mut card.set),
        CardField::Type => Some(&mut card.card_type),
        CardField::Faction => Some(&mut card.faction),
        CardField::Rarity => Some(&mut card.rarity),
        CardField::Text => Some(&mut card.text),
        CardField::InPlayText => Some(&mut card.in_play_text),
        CardField::Flavor => Some(&mut card.flavor),
        CardField::Artist => Some(&mut card.artist),
        CardField::Race => Some(&mut card.race),
        CardField::PlayerClass => Some(&mut card.player_class),
        CardField::HowToGet => Some(&mut card.how_to_get),
        CardField::HowToGetGold => Some(&mut card.how_to_get_gold),
        _ => None,
    }
}

fn number_slot(card: &mut CardRecord, field: CardField) -> Option<&mut Option<i64>> {
    match field {
        CardField::Cost => Some(&mut card.cost),
        CardField::Attack => Some(&mut card.attack),
        CardField::Health => Some(&mut card.health),
        CardField::Durability => Some(&mut card.durability),
        _ => None,
    }
}

fn bool_slot(card: &mut CardRecord, field: CardField) -> Option<&mut Option<bool>> {
    match field {
        CardField::Collectible => Some(&mut card.collectible),
        CardField::Elite => Some(&mut card.elite),
        _ => None,
    }
}
