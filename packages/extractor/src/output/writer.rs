//! Atomic JSON file writing and per-language dataset files.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::assemble::SetMap;
use crate::config::{card_backs_file_name, set_file_name};
use crate::error::Result;
use crate::language::Language;
use crate::types::CardBackRecord;

/// Serialize `value` as compact JSON to `dir/file_name`.
///
/// The content goes to a hidden temporary file in `dir` first and is renamed
/// into place once flushed to disk.
pub fn write_json_atomic<T: Serialize + ?Sized>(
    dir: &Path,
    file_name: &str,
    value: &T,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let output_file = dir.join(file_name);
    let temp_file = dir.join(format!(".{file_name}.tmp"));
    let content = serde_json::to_vec(value)?;

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(&content)?;
        file.sync_all()?;
    }

    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(&output_file)?;
    }

    fs::rename(&temp_file, &output_file)?;
    debug!(path = %output_file.display(), bytes = content.len(), "Wrote JSON");
    Ok(output_file)
}

/// Write one `<Set>.<lang>.json` file per set.
pub fn save_sets(dir: &Path, sets: &SetMap, language: Language) -> Result<Vec<PathBuf>> {
    sets.iter()
        .map(|(set, cards)| write_json_atomic(dir, &set_file_name(set, language), cards))
        .collect()
}

/// Write `CardBacks.<lang>.json`.
pub fn save_card_backs(dir: &Path, backs: &[CardBackRecord], language: Language) -> Result<PathBuf> {
    write_json_atomic(dir, &card_backs_file_name(language), backs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CardRecord;
    use tempfile::tempdir;

    #[test]
    fn test_write_json_atomic_is_compact() {
        let dir = tempdir().unwrap();
        let path = write_json_atomic(dir.path(), "list.json", &["a", "b"]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), r#"["a","b"]"#);
        assert!(!dir.path().join(".list.json.tmp").exists());
    }

    #[test]
    fn test_write_json_atomic_replaces_existing() {
        let dir = tempdir().unwrap();
        write_json_atomic(dir.path(), "x.json", &1).unwrap();
        let path = write_json_atomic(dir.path(), "x.json", &2).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "2");
    }

    #[test]
    fn test_write_creates_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("out").join("json");
        let path = write_json_atomic(&nested, "x.json", &true).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_sets() {
        let dir = tempdir().unwrap();
        let mut wisp = CardRecord::new("CS2_231");
        wisp.set = Some("Expert".to_string());
        let sets = SetMap::from([("Expert".to_string(), vec![wisp])]);

        let paths = save_sets(dir.path(), &sets, Language::FrFr).unwrap();
        assert_eq!(paths, [dir.path().join("Expert.frFR.json")]);
        assert_eq!(
            fs::read_to_string(&paths[0]).unwrap(),
            r#"[{"id":"CS2_231","set":"Expert"}]"#
        );
    }

    #[test]
    fn test_save_card_backs() {
        let dir = tempdir().unwrap();
        let back = CardBackRecord {
            id: Some(0),
            name: Some("Classic".to_string()),
            ..CardBackRecord::default()
        };
        let path = save_card_backs(dir.path(), &[back], Language::EnUs).unwrap();
        assert_eq!(path.file_name().unwrap(), "CardBacks.enUS.json");
        assert_eq!(fs::read_to_string(path).unwrap(), r#"[{"id":0,"name":"Classic"}]"#);
    }
}
