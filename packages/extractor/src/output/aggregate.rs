//! Aggregate artifacts spanning sets and languages.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::writer::write_json_atomic;
use crate::assemble::SetMap;
use crate::config::{
    all_sets_file_name, ALL_SETS_ALL_LANGUAGES_FILE, DATASET_VERSION, SET_LIST_FILE, VERSION_FILE,
};
use crate::error::Result;
use crate::language::Language;

/// Contents of `version.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionStamp {
    pub version: String,
    /// Generation date, `YYYY-MM-DD`.
    pub generated: String,
}

impl VersionStamp {
    #[must_use]
    pub fn new(generated: NaiveDate) -> Self {
        Self {
            version: DATASET_VERSION.to_string(),
            generated: generated.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Copy of `sets` without the per-record `set` field, which is redundant
/// once records are keyed by set name.
#[must_use]
pub fn strip_set(sets: &SetMap) -> SetMap {
    sets.iter()
        .map(|(name, cards)| {
            let cards = cards
                .iter()
                .cloned()
                .map(|mut card| {
                    card.set = None;
                    card
                })
                .collect();
            (name.clone(), cards)
        })
        .collect()
}

/// Write `AllSets.<lang>.json` for one language.
pub fn save_all_sets(dir: &Path, sets: &SetMap, language: Language) -> Result<PathBuf> {
    write_json_atomic(dir, &all_sets_file_name(language), &strip_set(sets))
}

/// Write the cross-language artifacts: `AllSetsAllLanguages.json`,
/// `SetList.json` and `version.json`.
///
/// Call only once every language has been written successfully.
pub fn save_aggregates(
    dir: &Path,
    languages: &BTreeMap<Language, SetMap>,
    generated: NaiveDate,
) -> Result<Vec<PathBuf>> {
    let all: BTreeMap<Language, SetMap> = languages
        .iter()
        .map(|(language, sets)| (*language, strip_set(sets)))
        .collect();

    let set_list: BTreeSet<&str> = languages
        .values()
        .flat_map(|sets| sets.keys().map(String::as_str))
        .collect();

    let paths = vec![
        write_json_atomic(dir, ALL_SETS_ALL_LANGUAGES_FILE, &all)?,
        write_json_atomic(dir, SET_LIST_FILE, &set_list)?,
        write_json_atomic(dir, VERSION_FILE, &VersionStamp::new(generated))?,
    ];
    info!(
        languages = languages.len(),
        sets = set_list.len(),
        "Wrote aggregate files"
    );
    Ok(paths)
}
