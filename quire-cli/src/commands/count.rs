//! Word and phrase counting command

use crate::error::CliResult;
use clap::Args;
use quire_core::{analysis, Node};
use std::io::Write;

/// Arguments for the count command
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Phrase to count; counts all words when omitted. A multi-word phrase
    /// is counted as a literal substring within each paragraph.
    #[arg(value_name = "PHRASE")]
    pub phrase: Option<String>,
}

impl CountArgs {
    /// Execute the count command.
    pub fn execute<W: Write>(&self, root: &Node, out: &mut W) -> CliResult<()> {
        let count = match &self.phrase {
            Some(phrase) => analysis::phrase_count(root, phrase),
            None => analysis::word_count(root),
        };
        writeln!(out, "{count}")?;
        Ok(())
    }
}
