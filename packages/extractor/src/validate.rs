//! Type audit of emitted JSON datasets.
//!
//! Every field of every record is checked against a fixed table of expected
//! JSON types. Findings are reported, never raised: the audit runs after the
//! datasets have been written and only informs manual review.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::config::{ALL_SETS_NAME, CARD_BACKS_NAME};
use crate::error::Result;
use crate::language::Language;

/// A JSON primitive type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    String,
    Number,
    Boolean,
}

impl Primitive {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }

    fn matches(&self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
        }
    }
}

/// Expected type of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedType {
    Primitive(Primitive),
    ArrayOf(Primitive),
}

impl fmt::Display for ExpectedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => f.write_str(p.as_str()),
            Self::ArrayOf(p) => write!(f, "[{}]", p.as_str()),
        }
    }
}

const STRING: ExpectedType = ExpectedType::Primitive(Primitive::String);
const NUMBER: ExpectedType = ExpectedType::Primitive(Primitive::Number);
const BOOLEAN: ExpectedType = ExpectedType::Primitive(Primitive::Boolean);

/// Field name to expected type.
#[derive(Debug, Clone, Copy)]
pub struct TypeSchema {
    pub name: &'static str,
    pub fields: &'static [(&'static str, ExpectedType)],
}

impl TypeSchema {
    #[must_use]
    pub fn expected(&self, field: &str) -> Option<ExpectedType> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, expected)| *expected)
    }
}

/// Schema of card records.
pub static CARD_SCHEMA: TypeSchema = TypeSchema {
    name: "cards",
    fields: &[
        ("id", STRING),
        ("name", STRING),
        ("set", STRING),
        ("type", STRING),
        ("faction", STRING),
        ("rarity", STRING),
        ("cost", NUMBER),
        ("attack", NUMBER),
        ("health", NUMBER),
        ("durability", NUMBER),
        ("text", STRING),
        ("inPlayText", STRING),
        ("flavor", STRING),
        ("artist", STRING),
        ("collectible", BOOLEAN),
        ("elite", BOOLEAN),
        ("race", STRING),
        ("playerClass", STRING),
        ("howToGet", STRING),
        ("howToGetGold", STRING),
        ("mechanics", ExpectedType::ArrayOf(Primitive::String)),
    ],
};

/// Schema of card back records.
pub static CARD_BACK_SCHEMA: TypeSchema = TypeSchema {
    name: "card backs",
    fields: &[
        ("id", NUMBER),
        ("name", STRING),
        ("enabled", BOOLEAN),
        ("sourceType", STRING),
        ("source", STRING),
        ("description", STRING),
        ("howToGet", STRING),
    ],
};

/// JSON type name of a value.
#[must_use]
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// What is wrong with a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// The field is not in the schema.
    UnknownField,
    /// An array field holds an element of the wrong type.
    NonMatchingElement { expected: Primitive },
    /// The field's value has the wrong type.
    InvalidType {
        expected: ExpectedType,
        found: &'static str,
    },
    /// The record itself is not a JSON object.
    NotAnObject,
}

/// One finding of the audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeViolation {
    pub set: String,
    /// Name of the offending record, or its id when unnamed.
    pub record: String,
    pub field: String,
    pub value: String,
    pub kind: ViolationKind,
}

impl fmt::Display for TypeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            set,
            record,
            field,
            value,
            kind,
        } = self;
        match kind {
            ViolationKind::UnknownField => {
                write!(f, "{set} ({record}) NO KNOWN TYPE REFERENCE: [{field}] : [{value}]")
            }
            ViolationKind::NonMatchingElement { expected } => write!(
                f,
                "{set} ({record}) HAS A NON-{} IN ARRAY: [{field}] : [{value}]",
                expected.as_str()
            ),
            ViolationKind::InvalidType { expected, found } => write!(
                f,
                "{set} ({record}) INVALID TYPE: [{field}] : [{value}] ({found} !== {expected})"
            ),
            ViolationKind::NotAnObject => {
                write!(f, "{set} ({record}) INVALID TYPE: [{value}] (Not an object)")
            }
        }
    }
}

/// Audits record lists against a [`TypeSchema`].
#[derive(Debug, Clone, Copy)]
pub struct TypeValidator {
    schema: &'static TypeSchema,
}

impl TypeValidator {
    #[must_use]
    pub fn new(schema: &'static TypeSchema) -> Self {
        Self { schema }
    }

    #[must_use]
    pub fn cards() -> Self {
        Self::new(&CARD_SCHEMA)
    }

    #[must_use]
    pub fn card_backs() -> Self {
        Self::new(&CARD_BACK_SCHEMA)
    }

    #[must_use]
    pub fn schema(&self) -> &'static TypeSchema {
        self.schema
    }

    /// Check every field of every record of one set.
    #[must_use]
    pub fn validate_set(&self, set_name: &str, records: &[Value]) -> Vec<TypeViolation> {
        let mut violations = Vec::new();

        for record in records {
            let Some(fields) = record.as_object() else {
                violations.push(TypeViolation {
                    set: set_name.to_string(),
                    record: "?".to_string(),
                    field: String::new(),
                    value: record.to_string(),
                    kind: ViolationKind::NotAnObject,
                });
                continue;
            };

            let label = record_label(fields);
            for (field, value) in fields {
                if let Some(kind) = self.check_field(field, value) {
                    violations.push(TypeViolation {
                        set: set_name.to_string(),
                        record: label.clone(),
                        field: field.clone(),
                        value: display_value(value),
                        kind,
                    });
                }
            }
        }

        violations
    }

    fn check_field(&self, field: &str, value: &Value) -> Option<ViolationKind> {
        let Some(expected) = self.schema.expected(field) else {
            return Some(ViolationKind::UnknownField);
        };

        match (expected, value) {
            (ExpectedType::ArrayOf(element), Value::Array(items)) => items
                .iter()
                .any(|item| !element.matches(item))
                .then_some(ViolationKind::NonMatchingElement { expected: element }),
            (ExpectedType::Primitive(primitive), value) if primitive.matches(value) => None,
            (expected, value) => Some(ViolationKind::InvalidType {
                expected,
                found: json_type_name(value),
            }),
        }
    }
}

fn record_label(fields: &Map<String, Value>) -> String {
    ["name", "id"]
        .iter()
        .find_map(|key| fields.get(*key))
        .map(display_value)
        .unwrap_or_else(|| "?".to_string())
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Kind of an emitted dataset file, derived from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetFile {
    /// `<Set>.<lang>.json`
    Set { set: String, language: Language },
    /// `AllSets.<lang>.json`
    AllSets(Language),
    /// `CardBacks.<lang>.json`
    CardBacks(Language),
}

impl DatasetFile {
    /// Classify a file name. Files that are not per-language datasets
    /// (`SetList.json`, `version.json`, ...) yield `None`.
    ///
    /// # Examples
    /// ```
    /// use cardjson_extractor::validate::DatasetFile;
    /// use cardjson_extractor::Language;
    ///
    /// assert_eq!(
    ///     DatasetFile::classify("CardBacks.frFR.json"),
    ///     Some(DatasetFile::CardBacks(Language::FrFr))
    /// );
    /// assert_eq!(DatasetFile::classify("SetList.json"), None);
    /// ```
    #[must_use]
    pub fn classify(file_name: &str) -> Option<Self> {
        let stem = file_name.strip_suffix(".json")?;
        let (base, code) = stem.rsplit_once('.')?;
        let language = Language::from_code(code)?;

        Some(match base {
            ALL_SETS_NAME => Self::AllSets(language),
            CARD_BACKS_NAME => Self::CardBacks(language),
            set => Self::Set {
                set: set.to_string(),
                language,
            },
        })
    }
}

/// Audit result for a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub files_checked: Vec<PathBuf>,
    pub violations: Vec<TypeViolation>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Audit one dataset file.
///
/// Returns `Ok(None)` for files that are not datasets.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn validate_file(path: &Path) -> Result<Option<Vec<TypeViolation>>> {
    let Some(kind) = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(DatasetFile::classify)
    else {
        debug!(path = %path.display(), "Skipping non-dataset file");
        return Ok(None);
    };

    let read = || -> Result<Value> { Ok(serde_json::from_str(&fs::read_to_string(path)?)?) };
    let json = read().map_err(|e| e.in_document(path))?;

    let violations = match kind {
        DatasetFile::Set { set, .. } => TypeValidator::cards().validate_set(&set, as_records(&json)),
        DatasetFile::CardBacks(_) => {
            TypeValidator::card_backs().validate_set(CARD_BACKS_NAME, as_records(&json))
        }
        DatasetFile::AllSets(_) => {
            let validator = TypeValidator::cards();
            json.as_object()
                .into_iter()
                .flatten()
                .flat_map(|(set, records)| validator.validate_set(set, as_records(records)))
                .collect()
        }
    };

    Ok(Some(violations))
}

fn as_records(value: &Value) -> &[Value] {
    value.as_array().map(Vec::as_slice).unwrap_or_default()
}

/// Audit every dataset file directly inside `dir`, in file name order.
///
/// # Errors
/// Returns an error if the directory or a dataset file cannot be read.
pub fn validate_dir(dir: &Path) -> Result<ValidationReport> {
    let mut paths = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();

    let mut report = ValidationReport::default();
    for path in paths.into_iter().filter(|p| p.is_file()) {
        if let Some(violations) = validate_file(&path)? {
            for violation in &violations {
                info!("{violation}");
            }
            report.violations.extend(violations);
            report.files_checked.push(path);
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_valid_cards_have_no_violations() {
        let records = vec![json!({
            "id": "EX1_029",
            "name": "Leper Gnome",
            "set": "Expert",
            "cost": 1,
            "collectible": true,
            "mechanics": ["Deathrattle"]
        })];
        assert!(TypeValidator::cards().validate_set("Expert", &records).is_empty());
    }

    #[test]
    fn test_unknown_field() {
        let records = vec![json!({"id": "X", "name": "Odd", "spooky": 1})];
        let violations = TypeValidator::cards().validate_set("Expert", &records);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::UnknownField);
        assert_eq!(
            violations[0].to_string(),
            "Expert (Odd) NO KNOWN TYPE REFERENCE: [spooky] : [1]"
        );
    }

    #[test]
    fn test_invalid_primitive_type() {
        let records = vec![json!({"id": "X", "name": "Odd", "cost": "3"})];
        let violations = TypeValidator::cards().validate_set("Basic", &records);

        assert_eq!(
            violations[0].to_string(),
            "Basic (Odd) INVALID TYPE: [cost] : [3] (string !== number)"
        );
    }

    #[test]
    fn test_array_with_wrong_element() {
        let records = vec![json!({"id": "X", "mechanics": ["Taunt", 4]})];
        let violations = TypeValidator::cards().validate_set("Basic", &records);

        assert_eq!(
            violations[0].kind,
            ViolationKind::NonMatchingElement {
                expected: Primitive::String
            }
        );
        assert_eq!(violations[0].record, "X");
    }

    #[test]
    fn test_array_field_with_scalar() {
        let records = vec![json!({"id": "X", "mechanics": "Taunt"})];
        let violations = TypeValidator::cards().validate_set("Basic", &records);
        assert_eq!(
            violations[0].kind,
            ViolationKind::InvalidType {
                expected: ExpectedType::ArrayOf(Primitive::String),
                found: "string"
            }
        );
    }

    #[test]
    fn test_card_back_schema() {
        let records = vec![json!({"id": "4", "name": "Pandaria", "enabled": true})];
        let violations = TypeValidator::card_backs().validate_set("CardBacks", &records);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "id");
    }

    #[test]
    fn test_classify_file_names() {
        assert_eq!(
            DatasetFile::classify("Curse of Naxxramas.deDE.json"),
            Some(DatasetFile::Set {
                set: "Curse of Naxxramas".to_string(),
                language: Language::DeDe
            })
        );
        assert_eq!(
            DatasetFile::classify("AllSets.enUS.json"),
            Some(DatasetFile::AllSets(Language::EnUs))
        );
        assert_eq!(DatasetFile::classify("AllSetsAllLanguages.json"), None);
        assert_eq!(DatasetFile::classify("version.json"), None);
        assert_eq!(DatasetFile::classify("notes.enUS.txt"), None);
    }

    #[test]
    fn test_validate_dir_reports_without_failing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("Basic.enUS.json"),
            r#"[{"id":"CS2_231","name":"Wisp","cost":"0"}]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("AllSets.enUS.json"),
            r#"{"Basic":[{"id":"CS2_231","name":"Wisp","cost":0}]}"#,
        )
        .unwrap();
        fs::write(dir.path().join("SetList.json"), r#"["Basic"]"#).unwrap();

        let report = validate_dir(dir.path()).unwrap();
        assert_eq!(report.files_checked.len(), 2);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].field, "cost");
    }

    #[test]
    fn test_validate_file_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Basic.enUS.json");
        fs::write(&path, "[{").unwrap();

        let err = validate_file(&path).unwrap_err();
        assert!(matches!(err, ExtractError::Document { .. }));
    }
}
