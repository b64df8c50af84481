//! Structure outline command

use crate::error::CliResult;
use clap::Args;
use quire_core::{analysis, Node};
use std::io::Write;

/// Arguments for the structure command
#[derive(Debug, Args)]
pub struct StructureArgs {
    /// Include each sentence's text in the outline
    #[arg(short, long)]
    pub sentences: bool,

    /// Maximum depth to display
    #[arg(short, long, default_value_t = 99)]
    pub max_depth: usize,
}

impl StructureArgs {
    /// Execute the structure command.
    pub fn execute<W: Write>(&self, root: &Node, out: &mut W) -> CliResult<()> {
        write!(
            out,
            "{}",
            analysis::render_outline(root, self.sentences, self.max_depth)
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_core::WorkProcessor;

    #[test]
    fn outline_respects_max_depth() {
        let root = WorkProcessor::new()
            .process_text("A tiny work. For testing.\n\n")
            .unwrap();
        let args = StructureArgs {
            sentences: false,
            max_depth: 1,
        };
        let mut out = Vec::new();
        args.execute(&root, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[Chapter]"));
        assert!(!text.contains("[Section]"));
    }
}
