//! cardjson extractor - Turn game card XML into per-language JSON datasets.
//!
//! This crate reads the card definition XML left behind by the asset
//! extraction tools, resolves and coerces every known tag, and writes one
//! canonical JSON dataset per card set and language.
//!
//! # Example
//!
//! ```
//! use cardjson_extractor::extract::{extract_document, Extracted};
//! use cardjson_extractor::Language;
//!
//! let xml = r#"<Entity CardID="EX1_029">
//!     <Tag name="CardName" type="String"><enUS>Leper Gnome</enUS></Tag>
//!     <Tag name="Rarity" type="Number" value="1"/>
//!     <Tag name="Deathrattle" type="Bool" value="1"/>
//! </Entity>"#;
//!
//! let Extracted::Cards(cards) = extract_document(xml, Language::EnUs).unwrap() else {
//!     panic!("expected cards");
//! };
//! let gnome = &cards.records[0];
//! assert_eq!(gnome.rarity.as_deref(), Some("Common"));
//! assert_eq!(gnome.mechanics, Some(vec!["Deathrattle".to_string()]));
//! ```
//!
//! # Architecture
//!
//! - [`schema`]: document shape detection and per-generation lookup tables
//! - [`fields`]: the known card fields, mechanics and card back columns
//! - [`resolver`]: locating a tag's node in an entity
//! - [`coerce`]: typing raw tag values
//! - [`extract`]: per-generation input adapters producing records
//! - [`assemble`]: grouping, repairing and sorting cards into sets
//! - [`validate`]: type audit of emitted JSON
//! - [`source`]: input document discovery
//! - [`output`]: atomic JSON writers
//! - [`generator`]: the per-language generation service
//! - [`cli`]: command-line interface

pub mod assemble;
pub mod cli;
pub mod coerce;
pub mod config;
pub mod error;
pub mod extract;
pub mod fields;
pub mod generator;
pub mod language;
pub mod output;
pub mod resolver;
pub mod schema;
pub mod source;
pub mod types;
pub mod validate;
pub mod xml;

// Re-export main functions
pub use generator::{generate_card_backs, generate_cards};

// Re-export commonly used items
pub use config::{validate_language, GenerateConfig};
pub use error::{ExtractError, Result};
pub use language::Language;
pub use schema::SchemaGeneration;
pub use types::{CardBackRecord, CardRecord, Extraction};
