//! Chapter extraction command

use crate::error::CliResult;
use clap::Args;
use quire_core::{analysis, Node};
use std::io::Write;

/// Arguments for the chapter command
#[derive(Debug, Args)]
pub struct ChapterArgs {
    /// Chapter number (1-based)
    #[arg(value_name = "N")]
    pub number: usize,

    /// Render as an HTML fragment instead of plain text
    #[arg(long)]
    pub html: bool,
}

impl ChapterArgs {
    /// Execute the chapter command. An out-of-range chapter prints nothing.
    pub fn execute<W: Write>(&self, root: &Node, out: &mut W) -> CliResult<()> {
        let text = if self.html {
            analysis::chapter_html(root, self.number)
        } else {
            analysis::chapter_text(root, self.number)
        };
        writeln!(out, "{text}")?;
        Ok(())
    }
}
