//! Supported output languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// A language the card data is localized into.
///
/// The declaration order is the canonical processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "enUS")]
    EnUs,
    #[serde(rename = "frFR")]
    FrFr,
    #[serde(rename = "zhTW")]
    ZhTw,
    #[serde(rename = "zhCN")]
    ZhCn,
    #[serde(rename = "ruRU")]
    RuRu,
    #[serde(rename = "ptBR")]
    PtBr,
    #[serde(rename = "plPL")]
    PlPl,
    #[serde(rename = "koKR")]
    KoKr,
    #[serde(rename = "itIT")]
    ItIt,
    #[serde(rename = "esMX")]
    EsMx,
    #[serde(rename = "esES")]
    EsEs,
    #[serde(rename = "deDE")]
    DeDe,
}

impl Language {
    /// All supported languages in canonical order.
    pub const ALL: [Language; 12] = [
        Self::EnUs,
        Self::FrFr,
        Self::ZhTw,
        Self::ZhCn,
        Self::RuRu,
        Self::PtBr,
        Self::PlPl,
        Self::KoKr,
        Self::ItIt,
        Self::EsMx,
        Self::EsEs,
        Self::DeDe,
    ];

    /// Locale code as used in XML node names and output file names.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::EnUs => "enUS",
            Self::FrFr => "frFR",
            Self::ZhTw => "zhTW",
            Self::ZhCn => "zhCN",
            Self::RuRu => "ruRU",
            Self::PtBr => "ptBR",
            Self::PlPl => "plPL",
            Self::KoKr => "koKR",
            Self::ItIt => "itIT",
            Self::EsMx => "esMX",
            Self::EsEs => "esES",
            Self::DeDe => "deDE",
        }
    }

    /// Country display name.
    #[must_use]
    pub fn country(&self) -> &'static str {
        match self {
            Self::EnUs => "United States",
            Self::FrFr => "France",
            Self::ZhTw => "Taiwan",
            Self::ZhCn => "China",
            Self::RuRu => "Russia",
            Self::PtBr => "Brazil",
            Self::PlPl => "Poland",
            Self::KoKr => "South Korea",
            Self::ItIt => "Italy",
            Self::EsMx => "Mexico",
            Self::EsEs => "Spain",
            Self::DeDe => "Germany",
        }
    }

    /// Language display name.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::EnUs => "English",
            Self::FrFr => "French",
            Self::ZhTw | Self::ZhCn => "Chinese",
            Self::RuRu => "Russian",
            Self::PtBr => "Portuguese",
            Self::PlPl => "Polish",
            Self::KoKr => "Korean",
            Self::ItIt => "Italian",
            Self::EsMx | Self::EsEs => "Spanish",
            Self::DeDe => "German",
        }
    }

    /// Parse a locale code, returning `None` for unknown codes.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| ExtractError::InvalidLanguage(s.to_string()))
    }
}
