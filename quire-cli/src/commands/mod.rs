//! Command definitions and dispatch

pub mod chapter;
pub mod chapter_characters;
pub mod characters;
pub mod count;
pub mod frequencies;
pub mod serve;
pub mod structure;

use crate::config::FileConfig;
use crate::error::CliResult;
use crate::input;
use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use quire_core::{ChapterRule, ProcessorConfig};
use std::path::PathBuf;

/// Structural analysis of prose works.
#[derive(Debug, Parser)]
#[command(name = "quire", version, about = "Structural analysis of prose works")]
pub struct Cli {
    /// Input file to process, or `-` for standard input
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Regular expression which, matched against a completed sentence,
    /// starts a new chapter
    #[arg(short = 'r', long, value_name = "REGEX")]
    pub chapter_rule: Option<String>,

    /// Word that closes a section when it stands alone [default: ---]
    #[arg(long, value_name = "WORD")]
    pub section_marker: Option<String>,

    /// Word that closes a chapter when it stands alone [default: ===]
    #[arg(long, value_name = "WORD")]
    pub chapter_marker: Option<String>,

    /// Configuration file with marker and rule defaults
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available queries over the processed work.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Display the processed structure as an indented outline
    Structure(structure::StructureArgs),
    /// List the confirmed characters
    Characters(characters::CharactersArgs),
    /// List characters ranked by appearance frequency
    Frequencies(frequencies::FrequenciesArgs),
    /// Summarize each chapter with its top characters
    ChapterCharacters(chapter_characters::ChapterCharactersArgs),
    /// Print one chapter's reconstructed text
    Chapter(chapter::ChapterArgs),
    /// Count words, or occurrences of a phrase
    Count(count::CountArgs),
    /// Serve the processed work over HTTP
    Serve(serve::ServeArgs),
}

impl Cli {
    /// Process the input and run the selected command.
    pub fn run(self) -> CliResult<()> {
        self.init_logging();

        let file_config = match &self.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        let processor_config = self.processor_config(&file_config)?;

        log::info!("processing {}", self.input);
        let root = input::load_root(&self.input, processor_config, self.quiet)?;
        log::debug!("assembled {} chapters", root.children.len());

        let mut stdout = std::io::stdout().lock();
        match &self.command {
            Command::Structure(args) => args.execute(&root, &mut stdout),
            Command::Characters(args) => args.execute(&root, &mut stdout),
            Command::Frequencies(args) => args.execute(&root, &mut stdout),
            Command::ChapterCharacters(args) => args.execute(&root, &mut stdout),
            Command::Chapter(args) => args.execute(&root, &mut stdout),
            Command::Count(args) => args.execute(&root, &mut stdout),
            Command::Serve(args) => {
                drop(stdout);
                args.execute(root)
            }
        }
    }

    /// Merge flags over file-config values into a processor configuration.
    fn processor_config(&self, file: &FileConfig) -> CliResult<ProcessorConfig> {
        let mut builder = ProcessorConfig::builder();
        if let Some(marker) = self
            .section_marker
            .clone()
            .or_else(|| file.section_marker.clone())
        {
            builder = builder.section_marker(marker);
        }
        if let Some(marker) = self
            .chapter_marker
            .clone()
            .or_else(|| file.chapter_marker.clone())
        {
            builder = builder.chapter_marker(marker);
        }
        let rule = match self.chapter_rule.as_deref().or(file.chapter_rule.as_deref()) {
            Some(pattern) => {
                ChapterRule::pattern(pattern).context("invalid chapter rule pattern")?
            }
            None => ChapterRule::headings(),
        };
        builder = builder.chapter_rule(rule);
        builder.build().context("invalid processor configuration")
    }

    /// Initialize logging based on verbosity level.
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_file_config() {
        let cli = Cli::parse_from(["quire", "book.txt", "--section-marker", "+++", "count"]);
        let file = FileConfig {
            section_marker: Some("***".to_string()),
            chapter_marker: None,
            chapter_rule: None,
        };
        let config = cli.processor_config(&file).unwrap();
        assert_eq!(config.detector.section_marker, "+++");
    }

    #[test]
    fn file_config_fills_unset_flags() {
        let cli = Cli::parse_from(["quire", "book.txt", "count"]);
        let file = FileConfig {
            section_marker: Some("***".to_string()),
            chapter_marker: None,
            chapter_rule: None,
        };
        let config = cli.processor_config(&file).unwrap();
        assert_eq!(config.detector.section_marker, "***");
        assert_eq!(config.detector.chapter_marker, "===");
    }

    #[test]
    fn bad_rule_pattern_fails_before_processing() {
        let cli = Cli::parse_from(["quire", "book.txt", "-r", "[bad", "count"]);
        assert!(cli.processor_config(&FileConfig::default()).is_err());
    }
}
