//! Character listing command

use crate::error::CliResult;
use crate::output::{self, ListFormat};
use clap::Args;
use quire_core::{analysis, Node, Thresholds};
use std::io::Write;

/// Arguments for the characters command
#[derive(Debug, Args)]
pub struct CharactersArgs {
    /// Appearances a name must exceed to be confirmed
    #[arg(long, default_value_t = 3)]
    pub min_appearance: u64,

    /// Non-sentence-initial appearances a name must exceed
    #[arg(long, default_value_t = 1)]
    pub min_non_first: u64,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ListFormat,
}

impl CharactersArgs {
    /// Execute the characters command.
    pub fn execute<W: Write>(&self, root: &Node, out: &mut W) -> CliResult<()> {
        let thresholds = Thresholds {
            min_appearance: self.min_appearance,
            min_non_first: self.min_non_first,
        };
        let names = analysis::identify_characters(root, thresholds);
        log::info!("confirmed {} characters", names.len());
        output::write_characters(out, &names, self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_core::WorkProcessor;

    #[test]
    fn lists_confirmed_characters() {
        let root = WorkProcessor::new()
            .process_text("Ada met Ada. Ada smiled.\n\n")
            .unwrap();
        let args = CharactersArgs {
            min_appearance: 1,
            min_non_first: 0,
            format: ListFormat::Text,
        };
        let mut out = Vec::new();
        args.execute(&root, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Ada\n");
    }
}
