//! Character frequency command

use crate::error::CliResult;
use crate::output::{self, ListFormat};
use clap::Args;
use quire_core::{analysis, Node, Thresholds};
use std::io::Write;

/// Arguments for the frequencies command
#[derive(Debug, Args)]
pub struct FrequenciesArgs {
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

impl FrequenciesArgs {
    /// Execute the frequencies command.
    pub fn execute<W: Write>(&self, root: &Node, out: &mut W) -> CliResult<()> {
        let thresholds = Thresholds {
            min_appearance: self.min_appearance,
            min_non_first: self.min_non_first,
        };
        let frequencies = analysis::character_frequencies(root, thresholds);
        let ranked = analysis::rank_by_frequency(&frequencies);
        output::write_frequencies(out, &ranked, self.format)
    }
}
