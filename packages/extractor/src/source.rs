//! Input document discovery.
//!
//! The extraction tooling leaves either one XML document per language
//! (`enUS.xml`, `frFR.xml`, ...) or a set of documents that each hold every
//! language. Both layouts are resolved here into the documents to read for a
//! given language.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::INPUT_EXTENSIONS;
use crate::error::{ExtractError, Result};
use crate::language::Language;

/// Where the documents for each language come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLayout {
    /// One document per language, named after the language code.
    PerLanguage {
        dir: PathBuf,
        files: BTreeMap<Language, PathBuf>,
    },
    /// Documents read once per language; localized text is chosen inside them.
    /// Documents with embedded single-language text only serve the language
    /// their file is named after, see [`language_of`].
    Shared { root: PathBuf, files: Vec<PathBuf> },
}

impl InputLayout {
    /// Inspect `path` (a file or a directory) and determine its layout.
    ///
    /// # Errors
    /// Returns an error if `path` does not exist or cannot be listed.
    pub fn discover(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path).map_err(|e| ExtractError::from(e).in_document(path))?;

        if !metadata.is_dir() {
            return Ok(Self::Shared {
                root: path.to_path_buf(),
                files: vec![path.to_path_buf()],
            });
        }

        let files = input_files(path).map_err(|e| e.in_document(path))?;
        let by_language: BTreeMap<Language, PathBuf> = files
            .iter()
            .filter_map(|file| language_of(file).map(|lang| (lang, file.clone())))
            .collect();

        let layout = if !files.is_empty() && by_language.len() == files.len() {
            Self::PerLanguage {
                dir: path.to_path_buf(),
                files: by_language,
            }
        } else {
            Self::Shared {
                root: path.to_path_buf(),
                files,
            }
        };
        debug!(path = %path.display(), layout = layout.kind(), documents = layout.len(), "Discovered input");
        Ok(layout)
    }

    /// The discovered file or directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        match self {
            Self::PerLanguage { dir, .. } => dir,
            Self::Shared { root, .. } => root,
        }
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::PerLanguage { .. } => "per-language",
            Self::Shared { .. } => "shared",
        }
    }

    /// Number of distinct documents.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::PerLanguage { files, .. } => files.len(),
            Self::Shared { files, .. } => files.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Documents to read for `language`, in processing order.
    ///
    /// # Errors
    /// `MissingInput` when no document serves `language`.
    pub fn documents_for(&self, language: Language) -> Result<Vec<&Path>> {
        let (documents, root): (Vec<&Path>, &Path) = match self {
            Self::PerLanguage { dir, files } => (
                files.get(&language).map(PathBuf::as_path).into_iter().collect(),
                dir,
            ),
            Self::Shared { root, files } => (files.iter().map(PathBuf::as_path).collect(), root),
        };

        if documents.is_empty() {
            return Err(ExtractError::MissingInput {
                language: language.to_string(),
                path: root.to_path_buf(),
            });
        }
        Ok(documents)
    }
}

/// Input files directly inside `dir`, sorted by path.
fn input_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_input = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| INPUT_EXTENSIONS.contains(&ext));
        if path.is_file() && is_input {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Language named by a file's stem, e.g. `frFR.xml`.
#[must_use]
pub fn language_of(path: &Path) -> Option<Language> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(Language::from_code)
}
