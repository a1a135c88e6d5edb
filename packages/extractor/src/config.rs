//! Configuration constants, file naming and validation for the extractor.

use std::path::PathBuf;

use crate::error::Result;
use crate::language::Language;

/// Language used when a localized string is missing for the requested one.
pub const FALLBACK_LANGUAGE: Language = Language::EnUs;

/// Default output directory for card datasets.
pub const DEFAULT_OUTPUT_DIR: &str = "out";

/// Default output directory for card back datasets.
pub const DEFAULT_CARD_BACK_OUTPUT_DIR: &str = "outCardBacks";

/// File extensions recognized as card XML input.
pub const INPUT_EXTENSIONS: &[&str] = &["xml", "txt"];

/// Base name of the per-language aggregate of all sets.
pub const ALL_SETS_NAME: &str = "AllSets";

/// File name of the all-sets, all-languages aggregate.
pub const ALL_SETS_ALL_LANGUAGES_FILE: &str = "AllSetsAllLanguages.json";

/// File name of the sorted set name list.
pub const SET_LIST_FILE: &str = "SetList.json";

/// File name of the dataset version stamp.
pub const VERSION_FILE: &str = "version.json";

/// Base name of the card back dataset.
pub const CARD_BACKS_NAME: &str = "CardBacks";

/// Dataset version written to `version.json`.
pub const DATASET_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable overriding the output directory.
pub const ENV_OUTPUT_DIR: &str = "CARDJSON_OUTPUT_DIR";

/// Environment variable restricting languages (comma separated codes).
pub const ENV_LANGUAGES: &str = "CARDJSON_LANGUAGES";

/// Environment variable disabling aggregate files when set to anything but `0`/`false`.
pub const ENV_NO_AGGREGATE: &str = "CARDJSON_NO_AGGREGATE";

/// Validate a language code.
///
/// # Examples
/// ```
/// use cardjson_extractor::config::validate_language;
/// use cardjson_extractor::Language;
///
/// assert_eq!(validate_language("frFR").unwrap(), Language::FrFr);
/// assert!(validate_language("fr").is_err());
/// ```
pub fn validate_language(code: &str) -> Result<Language> {
    code.parse()
}

/// Parse a comma separated list of language codes.
///
/// Empty items are ignored; duplicates are removed, keeping canonical order.
pub fn parse_language_list(list: &str) -> Result<Vec<Language>> {
    let mut languages = list
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(validate_language)
        .collect::<Result<Vec<_>>>()?;
    languages.sort();
    languages.dedup();
    Ok(languages)
}

/// File name of one set in one language, e.g. `Basic.enUS.json`.
#[must_use]
pub fn set_file_name(set: &str, language: Language) -> String {
    format!("{set}.{language}.json")
}

/// File name of the all-sets aggregate for one language.
#[must_use]
pub fn all_sets_file_name(language: Language) -> String {
    format!("{ALL_SETS_NAME}.{language}.json")
}

/// File name of the card back dataset for one language.
#[must_use]
pub fn card_backs_file_name(language: Language) -> String {
    format!("{CARD_BACKS_NAME}.{language}.json")
}

/// Configuration for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub output_dir: PathBuf,
    pub languages: Vec<Language>,
    pub write_aggregates: bool,
}

impl GenerateConfig {
    /// Create a configuration writing all languages to `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            languages: Language::ALL.to_vec(),
            write_aggregates: true,
        }
    }

    /// Load configuration from the environment, falling back to `default_output_dir`.
    pub fn from_env(default_output_dir: &str) -> Result<Self> {
        let output_dir = std::env::var(ENV_OUTPUT_DIR).unwrap_or_else(|_| default_output_dir.into());

        let languages = match std::env::var(ENV_LANGUAGES) {
            Ok(list) => parse_language_list(&list)?,
            Err(_) => Language::ALL.to_vec(),
        };

        let write_aggregates = std::env::var(ENV_NO_AGGREGATE)
            .ok()
            .map(|v| v == "false" || v == "0")
            .unwrap_or(true);

        Ok(Self {
            output_dir: output_dir.into(),
            languages,
            write_aggregates,
        })
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Restrict to the given languages. An empty list keeps the current set.
    pub fn with_languages(mut self, languages: Vec<Language>) -> Self {
        if !languages.is_empty() {
            let mut languages = languages;
            languages.sort();
            languages.dedup();
            self.languages = languages;
        }
        self
    }

    pub fn with_aggregates(mut self, write_aggregates: bool) -> Self {
        self.write_aggregates = write_aggregates;
        self
    }
}
