//! Generation service that ties discovery, extraction, assembly and output
//! together.
//!
//! Languages are processed one after another. A language's files are written
//! only after all of its documents were extracted; the cross-language
//! aggregates are written only after every language succeeded.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use roxmltree::Document;
use tracing::{debug, info};

use crate::assemble::{SetAssembler, SetMap};
use crate::config::GenerateConfig;
use crate::error::{ExtractError, Result};
use crate::extract::{Extracted, InputAdapter};
use crate::language::Language;
use crate::output::{save_aggregates, save_all_sets, save_card_backs, save_sets};
use crate::source::{language_of, InputLayout};
use crate::types::{CardBackRecord, CardRecord, Extraction};
use crate::xml::get_tag_name;

/// Outcome of one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSummary {
    pub language: Language,
    pub records: usize,
    pub sets: usize,
    pub warnings: Vec<String>,
    pub files: Vec<PathBuf>,
}

/// Outcome of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    pub languages: Vec<LanguageSummary>,
    pub aggregate_files: Vec<PathBuf>,
}

impl GenerateSummary {
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.languages.iter().map(|l| l.warnings.len()).sum()
    }

    /// Every file written by the run.
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.languages
            .iter()
            .flat_map(|l| l.files.iter())
            .chain(&self.aggregate_files)
            .map(PathBuf::as_path)
    }
}

/// Parse one document and extract it in `language`.
///
/// Returns `None` for a document whose embedded text belongs to another
/// language.
fn extract_path(path: &Path, language: Language) -> Result<Option<(Extracted, String)>> {
    let run = || -> Result<Option<(Extracted, String)>> {
        let xml = fs::read_to_string(path)?;
        let doc = Document::parse(&xml)?;
        let root = get_tag_name(doc.root_element()).to_string();
        let adapter = InputAdapter::detect(&doc)?;

        if adapter.generation().embeds_strings() {
            match language_of(path) {
                Some(own) if own == language => {}
                Some(own) => {
                    debug!(path = %path.display(), document = %own, %language, "Skipping document of another language");
                    return Ok(None);
                }
                None => return Err(ExtractError::UnlabelledDocument { root }),
            }
        }

        Ok(Some((adapter.extract(&doc, language)?, root)))
    };
    run().map_err(|e| e.in_document(path))
}

/// `MissingInput` when no document served `language`.
fn require_served(layout: &InputLayout, language: Language, served: usize) -> Result<()> {
    if served == 0 {
        return Err(ExtractError::MissingInput {
            language: language.to_string(),
            path: layout.root().to_path_buf(),
        });
    }
    Ok(())
}

/// Extract every card document serving `language`.
///
/// # Errors
/// The first fatal error of any document, tagged with its path, or
/// `MissingInput` when no document holds `language`.
pub fn extract_cards(layout: &InputLayout, language: Language) -> Result<Extraction<CardRecord>> {
    let mut extraction = Extraction::new();
    let mut served = 0;
    for path in layout.documents_for(language)? {
        match extract_path(path, language)? {
            Some((Extracted::Cards(cards), _)) => extraction.merge(cards),
            Some((Extracted::CardBacks(_), root)) => {
                return Err(ExtractError::UnsupportedDocument { root }.in_document(path));
            }
            None => continue,
        }
        served += 1;
    }
    require_served(layout, language, served)?;
    Ok(extraction)
}

/// Extract every card back document serving `language`.
pub fn extract_card_backs(
    layout: &InputLayout,
    language: Language,
) -> Result<Extraction<CardBackRecord>> {
    let mut extraction = Extraction::new();
    let mut served = 0;
    for path in layout.documents_for(language)? {
        match extract_path(path, language)? {
            Some((Extracted::CardBacks(backs), _)) => extraction.merge(backs),
            Some((Extracted::Cards(_), root)) => {
                return Err(ExtractError::UnsupportedDocument { root }.in_document(path));
            }
            None => continue,
        }
        served += 1;
    }
    require_served(layout, language, served)?;
    Ok(extraction)
}

/// Extract, assemble and write the card datasets of one language.
pub fn generate_cards_for_language(
    layout: &InputLayout,
    language: Language,
    config: &GenerateConfig,
) -> Result<(SetMap, LanguageSummary)> {
    let extraction = extract_cards(layout, language)?;
    let assembled = SetAssembler::new().assemble(extraction, language);

    let mut files = save_sets(&config.output_dir, &assembled.sets, language)?;
    if config.write_aggregates {
        files.push(save_all_sets(&config.output_dir, &assembled.sets, language)?);
    }

    let summary = LanguageSummary {
        language,
        records: assembled.card_count(),
        sets: assembled.sets.len(),
        warnings: assembled.warnings,
        files,
    };
    info!(%language, cards = summary.records, sets = summary.sets, "Generated cards");
    Ok((assembled.sets, summary))
}

/// Generate card datasets for every configured language.
///
/// `on_language` is called before each language is processed.
///
/// # Errors
/// Aborts on the first fatal error; files of languages already completed
/// stay in place, aggregates are not written.
pub fn generate_cards(
    input: &Path,
    config: &GenerateConfig,
    mut on_language: impl FnMut(Language),
) -> Result<GenerateSummary> {
    let layout = InputLayout::discover(input)?;
    info!(
        input = %input.display(),
        layout = layout.kind(),
        documents = layout.len(),
        "Generating cards"
    );

    let mut summary = GenerateSummary::default();
    let mut all_sets = BTreeMap::new();

    for &language in &config.languages {
        on_language(language);
        let (sets, language_summary) = generate_cards_for_language(&layout, language, config)?;
        all_sets.insert(language, sets);
        summary.languages.push(language_summary);
    }

    if config.write_aggregates {
        summary.aggregate_files =
            save_aggregates(&config.output_dir, &all_sets, Local::now().date_naive())?;
    }

    Ok(summary)
}

/// Generate card back datasets for every configured language.
pub fn generate_card_backs(
    input: &Path,
    config: &GenerateConfig,
    mut on_language: impl FnMut(Language),
) -> Result<GenerateSummary> {
    let layout = InputLayout::discover(input)?;
    let mut summary = GenerateSummary::default();

    for &language in &config.languages {
        on_language(language);
        let extraction = extract_card_backs(&layout, language)?;
        let path = save_card_backs(&config.output_dir, &extraction.records, language)?;
        info!(%language, card_backs = extraction.records.len(), "Generated card backs");

        summary.languages.push(LanguageSummary {
            language,
            records: extraction.records.len(),
            sets: 0,
            warnings: extraction.warnings,
            files: vec![path],
        });
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const WISP: &str = r#"<Entity CardID="CS2_231">
        <Tag name="CardName" type="String"><enUS>Wisp</enUS><frFR>Feu follet</frFR></Tag>
        <Tag name="CardSet" type="Number" value="3"/>
        <Tag name="CardType" type="Number" value="4"/>
    </Entity>"#;

    #[test]
    fn test_generate_cards_single_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("CS2_231.txt");
        fs::write(&input, WISP).unwrap();
        let out = dir.path().join("out");
        let config = GenerateConfig::new(&out).with_languages(vec![Language::EnUs, Language::FrFr]);

        let mut seen = Vec::new();
        let summary = generate_cards(&input, &config, |lang| seen.push(lang)).unwrap();

        assert_eq!(seen, [Language::EnUs, Language::FrFr]);
        assert_eq!(summary.languages.len(), 2);
        assert_eq!(summary.aggregate_files.len(), 3);
        assert!(out.join("Expert.frFR.json").exists());
        assert!(out.join("AllSets.enUS.json").exists());

        let fr = fs::read_to_string(out.join("Expert.frFR.json")).unwrap();
        assert!(fr.contains(r#""name":"Feu follet""#));
        assert!(fr.contains(r#""cost":0"#));
    }

    #[test]
    fn test_generate_cards_without_aggregates() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("CS2_231.txt");
        fs::write(&input, WISP).unwrap();
        let out = dir.path().join("out");
        let config = GenerateConfig::new(&out)
            .with_languages(vec![Language::EnUs])
            .with_aggregates(false);

        let summary = generate_cards(&input, &config, |_| {}).unwrap();

        assert!(summary.aggregate_files.is_empty());
        assert_eq!(summary.files().count(), 1);
        assert!(!out.join("SetList.json").exists());
    }

    #[test]
    fn test_card_back_document_rejected_for_cards() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("CARD_BACK.xml");
        fs::write(&input, r#"<Dbf><Record><Field column="ID">1</Field></Record></Dbf>"#).unwrap();
        let config = GenerateConfig::new(dir.path().join("out")).with_languages(vec![Language::EnUs]);

        let err = generate_cards(&input, &config, |_| {}).unwrap_err();
        let ExtractError::Document { source, .. } = err else {
            panic!("expected Document error");
        };
        assert!(matches!(*source, ExtractError::UnsupportedDocument { root } if root == "Dbf"));
    }

    const WISP_ENUM: &str = r#"<CardDefs>
        <Entity version="2" CardID="CS2_231">
            <Tag enumID="185" type="String">Wisp</Tag>
            <Tag enumID="183" type="" value="2"/>
        </Entity>
    </CardDefs>"#;

    #[test]
    fn test_embedded_text_only_serves_its_own_language() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("enUS.xml");
        fs::write(&input, WISP_ENUM).unwrap();
        let layout = InputLayout::discover(&input).unwrap();

        let cards = extract_cards(&layout, Language::EnUs).unwrap();
        assert_eq!(cards.records[0].name.as_deref(), Some("Wisp"));

        let err = extract_cards(&layout, Language::FrFr).unwrap_err();
        assert!(matches!(err, ExtractError::MissingInput { language, .. } if language == "frFR"));
    }

    #[test]
    fn test_embedded_text_needs_a_language_file_name() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("cards.xml");
        fs::write(&input, WISP_ENUM).unwrap();
        let layout = InputLayout::discover(&input).unwrap();

        let err = extract_cards(&layout, Language::EnUs).unwrap_err();
        let ExtractError::Document { source, .. } = err else {
            panic!("expected Document error");
        };
        assert!(matches!(*source, ExtractError::UnlabelledDocument { root } if root == "CardDefs"));
    }

    #[test]
    fn test_shared_directory_mixes_generations() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("CS2_231.txt"), WISP).unwrap();
        fs::write(dir.path().join("frFR.xml"), WISP_ENUM).unwrap();
        let layout = InputLayout::discover(dir.path()).unwrap();
        assert_eq!(layout.kind(), "shared");

        assert_eq!(extract_cards(&layout, Language::EnUs).unwrap().records.len(), 1);
        assert_eq!(extract_cards(&layout, Language::FrFr).unwrap().records.len(), 2);
    }

    #[test]
    fn test_fatal_error_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad.xml");
        fs::write(
            &input,
            r#"<Entity CardID="X"><Tag name="CardSet" type="Number" value="99"/></Entity>"#,
        )
        .unwrap();
        let out = dir.path().join("out");
        let config = GenerateConfig::new(&out).with_languages(vec![Language::EnUs]);

        assert!(generate_cards(&input, &config, |_| {}).is_err());
        assert!(!out.exists());
    }
}
