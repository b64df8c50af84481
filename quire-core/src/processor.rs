//! Pipeline facade
//!
//! Ties detector, staging, and assembler together behind one call. The
//! returned root is a plain owned value: callers pass it explicitly to the
//! query functions, and nothing in the pipeline survives the call.

use crate::assembler::TreeAssembler;
use crate::config::{ProcessorConfig, Staging};
use crate::detector::BoundaryDetector;
use crate::error::{CoreError, Result};
use crate::input::Input;
use crate::node::Node;
use std::sync::mpsc;
use std::thread;

/// Runs the full segmentation pipeline over one input and produces the
/// `Work` root.
#[derive(Debug, Clone, Default)]
pub struct WorkProcessor {
    config: ProcessorConfig,
}

impl WorkProcessor {
    /// Create a processor with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with the given configuration.
    pub fn with_config(config: ProcessorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Consume the entire input and assemble its structural tree.
    ///
    /// Either the whole stream is consumed and one tree is returned, or the
    /// pipeline aborts with the first error; there is no partial result.
    pub fn process(&self, input: Input) -> Result<Node> {
        let reader = input.into_reader()?;
        match self.config.staging {
            Staging::Synchronous => {
                let detector = BoundaryDetector::new(&self.config.detector, Vec::new());
                let events = detector.run(reader)?;
                Ok(TreeAssembler::assemble(events))
            }
            Staging::Pipelined { capacity } => {
                let (sender, receiver) = mpsc::sync_channel(capacity);
                thread::scope(|scope| {
                    let consumer = scope.spawn(move || {
                        let mut assembler = TreeAssembler::new();
                        while let Ok(event) = receiver.recv() {
                            assembler.accept(event);
                        }
                        assembler.finish()
                    });

                    let detector = BoundaryDetector::new(&self.config.detector, sender);
                    // On error the detector (and its sender) is dropped,
                    // which closes the channel and lets the consumer wind
                    // down before the scope joins it.
                    let sender = detector.run(reader)?;
                    drop(sender);

                    consumer
                        .join()
                        .map_err(|_| CoreError::Pipeline("assembler thread panicked".to_string()))
                })
            }
        }
    }

    /// Convenience: process a text string directly.
    pub fn process_text(&self, text: &str) -> Result<Node> {
        self.process(Input::from_text(text))
    }
}
