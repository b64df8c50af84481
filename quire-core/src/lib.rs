//! Hierarchical prose segmentation and structural queries
//!
//! Quire ingests raw prose and builds a nested structural model (words
//! within sentences within paragraphs within sections within chapters within
//! a work), then answers queries over that model: text reconstruction, word
//! and phrase counts, chapter extraction, and capitalization-based character
//! identification with frequency ranking.
//!
//! Data flows one way: characters → boundary events → tree → cursor-driven
//! queries.
//!
//! # Example
//!
//! ```rust
//! use quire_core::{analysis, Thresholds, WorkProcessor};
//!
//! let root = WorkProcessor::new()
//!     .process_text("Alice ran. Bob saw Alice. Alice and Bob talked.\n\n")
//!     .unwrap();
//!
//! assert_eq!(analysis::word_count(&root), 9);
//!
//! let thresholds = Thresholds { min_appearance: 1, min_non_first: 0 };
//! let characters = analysis::identify_characters(&root, thresholds);
//! assert!(characters.contains(&"Alice".to_string()));
//! ```

#![warn(missing_docs)]

pub mod analysis;
pub mod assembler;
pub mod boundary;
pub mod chapter_rule;
pub mod config;
pub mod cursor;
pub mod detector;
pub mod error;
pub mod input;
pub mod node;
pub mod processor;
pub mod unit;

pub use analysis::{ChapterProfile, ProfileOptions, RankedName, Thresholds};
pub use assembler::TreeAssembler;
pub use boundary::{Boundary, BoundarySink};
pub use chapter_rule::ChapterRule;
pub use config::{DetectorConfig, ProcessorConfig, ProcessorConfigBuilder, Staging};
pub use cursor::{Nodes, TreeCursor};
pub use detector::BoundaryDetector;
pub use error::{CoreError, Result};
pub use input::Input;
pub use node::{Node, SYNTHETIC_SPAN};
pub use processor::WorkProcessor;
pub use unit::Unit;
