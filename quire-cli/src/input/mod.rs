//! Input resolution
//!
//! Turns the positional INPUT argument into a processed work: `-` streams
//! standard input, anything else is opened as a file with a byte-progress
//! bar when the size is known.

use crate::error::CliResult;
use crate::progress;
use anyhow::Context;
use quire_core::{Input, Node, ProcessorConfig, WorkProcessor};
use std::fs::File;
use std::io;
use std::path::Path;

/// Process the given input source into a `Work` root.
pub fn load_root(spec: &str, config: ProcessorConfig, quiet: bool) -> CliResult<Node> {
    let processor = WorkProcessor::with_config(config);

    if spec == "-" {
        log::info!("reading from standard input");
        let root = processor
            .process(Input::from_reader(io::stdin()))
            .context("failed to process standard input")?;
        return Ok(root);
    }

    let path = Path::new(spec);
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let len = file.metadata().ok().map(|m| m.len());

    let root = match len {
        Some(total) if !quiet => {
            let bar = progress::read_bar(total);
            let reader = bar.wrap_read(file);
            let root = processor
                .process(Input::from_reader(reader))
                .with_context(|| format!("failed to process {}", path.display()))?;
            bar.finish_and_clear();
            root
        }
        _ => processor
            .process(Input::from_reader(file))
            .with_context(|| format!("failed to process {}", path.display()))?,
    };
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_core::analysis;
    use std::io::Write;

    #[test]
    fn loads_a_file_into_a_tree() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "A small file. With two sentences.").unwrap();
        let root = load_root(
            file.path().to_str().unwrap(),
            ProcessorConfig::default(),
            true,
        )
        .unwrap();
        assert_eq!(analysis::word_count(&root), 6);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_root("/no/such/book.txt", ProcessorConfig::default(), true).unwrap_err();
        assert!(err.to_string().contains("/no/such/book.txt"));
    }
}
