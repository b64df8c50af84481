//! Per-chapter character summary command

use crate::error::CliResult;
use crate::output::{self, ProfileFormat};
use clap::Args;
use quire_core::{analysis, Node, ProfileOptions};
use std::io::Write;

/// Arguments for the chapter-characters command
#[derive(Debug, Args)]
pub struct ChapterCharactersArgs {
    /// Show the top N characters per chapter
    #[arg(short, long, default_value_t = 3)]
    pub top: usize,

    /// Include each chapter's first sentence
    #[arg(short = 's', long)]
    pub first_sentence: bool,

    /// Include each chapter's Nth sentence (1-based)
    #[arg(short = 'x', long, value_name = "N")]
    pub nth_sentence: Option<usize>,

    /// Include each chapter's word count
    #[arg(short, long)]
    pub word_count: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ProfileFormat,
}

impl ChapterCharactersArgs {
    /// Execute the chapter-characters command.
    pub fn execute<W: Write>(&self, root: &Node, out: &mut W) -> CliResult<()> {
        let options = ProfileOptions {
            top: self.top,
            include_first_sentence: self.first_sentence,
            nth_sentence: self.nth_sentence,
            include_word_count: self.word_count,
        };
        let profiles = analysis::chapter_profiles(root, &options);
        log::info!("profiled {} chapters", profiles.len());
        output::write_profiles(out, &profiles, self.format)
    }
}
