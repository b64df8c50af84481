//! Processor configuration

use crate::chapter_rule::ChapterRule;
use crate::error::{CoreError, Result};

/// Default section-marker word (a Markdown horizontal rule).
pub const DEFAULT_SECTION_MARKER: &str = "---";

/// Default chapter-marker word.
pub const DEFAULT_CHAPTER_MARKER: &str = "===";

/// Default bounded capacity of the detector-to-assembler channel.
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Settings consumed by the boundary detector.
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Word that closes the current section when it stands alone
    pub section_marker: String,
    /// Word that closes the current chapter when it stands alone
    pub chapter_marker: String,
    /// Sentence-level chapter detection rule
    pub chapter_rule: ChapterRule,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            section_marker: DEFAULT_SECTION_MARKER.to_string(),
            chapter_marker: DEFAULT_CHAPTER_MARKER.to_string(),
            chapter_rule: ChapterRule::None,
        }
    }
}

/// How boundary events travel from detector to assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Staging {
    /// Detector feeds a bounded FIFO channel; the assembler drains it on its
    /// own thread. A full channel blocks the detector.
    Pipelined {
        /// Channel capacity in events
        capacity: usize,
    },
    /// Detector collects events in memory; the assembler folds them after
    /// the stream ends. Same ordering contract, no second thread.
    Synchronous,
}

impl Default for Staging {
    fn default() -> Self {
        Staging::Pipelined {
            capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

/// Full configuration for [`WorkProcessor`](crate::processor::WorkProcessor).
#[derive(Debug, Clone, Default)]
pub struct ProcessorConfig {
    /// Detector settings
    pub detector: DetectorConfig,
    /// Event staging between detector and assembler
    pub staging: Staging,
}

impl ProcessorConfig {
    /// Create a builder.
    pub fn builder() -> ProcessorConfigBuilder {
        ProcessorConfigBuilder::default()
    }
}

/// Fluent builder for [`ProcessorConfig`].
///
/// Chapter-rule patterns are compiled here, so malformed expressions are
/// rejected before any input is read.
#[derive(Debug, Default)]
pub struct ProcessorConfigBuilder {
    config: ProcessorConfig,
}

impl ProcessorConfigBuilder {
    /// Set the section-marker word.
    pub fn section_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.detector.section_marker = marker.into();
        self
    }

    /// Set the chapter-marker word.
    pub fn chapter_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.detector.chapter_marker = marker.into();
        self
    }

    /// Install an already-built chapter rule.
    pub fn chapter_rule(mut self, rule: ChapterRule) -> Self {
        self.config.detector.chapter_rule = rule;
        self
    }

    /// Compile and install a regular-expression chapter rule.
    pub fn chapter_pattern(mut self, pattern: &str) -> Result<Self> {
        self.config.detector.chapter_rule = ChapterRule::pattern(pattern)?;
        Ok(self)
    }

    /// Use the in-memory synchronous staging instead of the channel pipeline.
    pub fn synchronous(mut self) -> Self {
        self.config.staging = Staging::Synchronous;
        self
    }

    /// Set the bounded channel capacity for pipelined staging.
    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.config.staging = Staging::Pipelined { capacity };
        self
    }

    /// Validate and produce the configuration.
    pub fn build(self) -> Result<ProcessorConfig> {
        let detector = &self.config.detector;
        if detector.section_marker.is_empty() || detector.chapter_marker.is_empty() {
            return Err(CoreError::Config(
                "marker words must be non-empty".to_string(),
            ));
        }
        if detector.section_marker == detector.chapter_marker {
            return Err(CoreError::Config(format!(
                "section and chapter markers must differ (both {:?})",
                detector.section_marker
            )));
        }
        if let Staging::Pipelined { capacity: 0 } = self.config.staging {
            return Err(CoreError::Config(
                "event channel capacity must be at least 1".to_string(),
            ));
        }
        Ok(self.config)
    }
}
