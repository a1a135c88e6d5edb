//! Command-line interface for the extractor.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{
    validate_language, GenerateConfig, DEFAULT_CARD_BACK_OUTPUT_DIR, DEFAULT_OUTPUT_DIR,
};
use crate::error::Result;
use crate::generator::{generate_card_backs, generate_cards, GenerateSummary};
use crate::language::Language;
use crate::validate::validate_dir;

/// cardjson - Extract card data from game XML into per-language JSON datasets.
#[derive(Parser)]
#[command(name = "cardjson")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract cards and write one JSON file per set and language.
    Cards {
        /// Card XML file, or directory of card XML files
        input: PathBuf,

        /// Output directory (default: out/)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Language code to generate; repeat for several (default: all)
        #[arg(short = 'l', long = "language")]
        languages: Vec<String>,

        /// Skip AllSets, AllSetsAllLanguages, SetList and version files
        #[arg(long)]
        no_aggregate: bool,
    },

    /// Extract card backs and write one JSON file per language.
    CardBacks {
        /// Card back XML (DBF) file
        input: PathBuf,

        /// Output directory (default: outCardBacks/)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Language code to generate; repeat for several (default: all)
        #[arg(short = 'l', long = "language")]
        languages: Vec<String>,
    },

    /// Audit the field types of emitted JSON files. Reports only.
    Validate {
        /// Directory of emitted JSON files
        dir: PathBuf,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Cards {
            input,
            output,
            languages,
            no_aggregate,
        } => {
            let mut config = build_config(DEFAULT_OUTPUT_DIR, output, &languages)?;
            if no_aggregate {
                config = config.with_aggregates(false);
            }
            cards_command(&input, &config)
        }
        Commands::CardBacks {
            input,
            output,
            languages,
        } => {
            let config = build_config(DEFAULT_CARD_BACK_OUTPUT_DIR, output, &languages)?;
            card_backs_command(&input, &config)
        }
        Commands::Validate { dir } => validate_command(&dir),
    }
}

/// Environment configuration with command-line overrides applied.
fn build_config(
    default_output_dir: &str,
    output: Option<PathBuf>,
    languages: &[String],
) -> Result<GenerateConfig> {
    let languages = languages
        .iter()
        .map(|code| validate_language(code))
        .collect::<Result<Vec<_>>>()?;

    let mut config = GenerateConfig::from_env(default_output_dir)?.with_languages(languages);
    if let Some(output) = output {
        config = config.with_output_dir(output);
    }
    Ok(config)
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn language_message(language: Language) -> String {
    format!(
        "Extracting {} ({} / {})...",
        language,
        language.country(),
        language.display_name()
    )
}

/// Execute the cards command.
fn cards_command(input: &Path, config: &GenerateConfig) -> Result<()> {
    println!(
        "{} {} into {}",
        style("Extracting cards from").bold(),
        style(input.display()).cyan(),
        style(config.output_dir.display()).green()
    );
    println!();

    let pb = spinner();
    let summary = match generate_cards(input, config, |lang| pb.set_message(language_message(lang))) {
        Ok(summary) => summary,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };
    pb.finish_and_clear();

    print_summary(&summary, "cards");
    Ok(())
}

/// Execute the card-backs command.
fn card_backs_command(input: &Path, config: &GenerateConfig) -> Result<()> {
    println!(
        "{} {} into {}",
        style("Extracting card backs from").bold(),
        style(input.display()).cyan(),
        style(config.output_dir.display()).green()
    );
    println!();

    let pb = spinner();
    let summary =
        match generate_card_backs(input, config, |lang| pb.set_message(language_message(lang))) {
            Ok(summary) => summary,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };
    pb.finish_and_clear();

    print_summary(&summary, "card backs");
    Ok(())
}

fn print_summary(summary: &GenerateSummary, noun: &str) {
    for language in &summary.languages {
        print!(
            "  {}: {} {}",
            style(language.language).cyan(),
            language.records,
            noun
        );
        if language.sets > 0 {
            print!(" in {} sets", language.sets);
        }
        if !language.warnings.is_empty() {
            print!(", {} warnings", style(language.warnings.len()).yellow().bold());
        }
        println!();
    }

    println!();
    println!(
        "{} {} files",
        style("Wrote").green().bold(),
        summary.files().count()
    );
}

/// Execute the validate command.
fn validate_command(dir: &Path) -> Result<()> {
    let report = validate_dir(dir)?;

    for violation in &report.violations {
        println!("  {}", style(violation).yellow());
    }

    let status = if report.is_clean() {
        style("No type violations").green().bold()
    } else {
        style("Type violations found").yellow().bold()
    };
    println!(
        "{} in {} files ({} reported)",
        status,
        report.files_checked.len(),
        report.violations.len()
    );
    Ok(())
}
