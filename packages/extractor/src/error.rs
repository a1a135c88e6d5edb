//! Error types for the extractor.
//!
//! Every variant here is fatal for the run that raised it. Non-fatal findings
//! (unknown tag names, language fallbacks, repairs) are reported as warnings on
//! [`Extraction`](crate::types::Extraction) instead.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the extractor library.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A numeric tag code that is not in the schema generation's enum table.
    ///
    /// A new field was added to the source data and must be classified
    /// before extraction can continue.
    #[error("Unknown tag enumID [{code}] on card {card}")]
    UnknownEnumCode { code: String, card: String },

    /// A recognized enumerated tag carrying a value with no entry in its map.
    #[error("Unknown {tag}: {value}")]
    UnknownEnumValue { tag: String, value: String },

    /// A declared tag type that matches none of the coercion rules.
    #[error("Unhandled Tag type [{declared}] for tag {tag}")]
    UnhandledDeclaredType { tag: String, declared: String },

    /// A `Number` tag whose value is not an integer literal.
    #[error("Invalid number for {tag}: '{value}'")]
    InvalidNumber { tag: String, value: String },

    /// A coerced value whose kind does not fit the canonical field.
    #[error("Tag {tag} resolved to a {found}, but field '{field}' expects a {expected}")]
    FieldTypeMismatch {
        tag: String,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// Missing required XML element or attribute.
    #[error("Missing required XML element: {element} in {context}")]
    MissingElement { element: String, context: String },

    /// The document root matches no known schema generation, or holds records
    /// of the wrong kind for the requested output.
    #[error("Unsupported document: unexpected root element <{root}>")]
    UnsupportedDocument { root: String },

    /// A document whose text is embedded in a single language, with a file
    /// name that does not say which one.
    #[error("Cannot tell the language of <{root}> document; name it after its language code, e.g. enUS.xml")]
    UnlabelledDocument { root: String },

    /// No input document for a requested language.
    #[error("No input document for language {language} in {}", .path.display())]
    MissingInput { language: String, path: PathBuf },

    /// Unknown language code.
    #[error("Invalid language code: '{0}'. Expected one of enUS, frFR, zhTW, zhCN, ruRU, ptBR, plPL, koKR, itIT, esMX, esES, deDE")]
    InvalidLanguage(String),

    /// An error raised while processing a specific file.
    #[error("{}: {source}", .path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: Box<ExtractError>,
    },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExtractError {
    /// Attach the file being processed to this error.
    #[must_use]
    pub fn in_document(self, path: impl Into<PathBuf>) -> Self {
        match self {
            already @ Self::Document { .. } => already,
            other => Self::Document {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
