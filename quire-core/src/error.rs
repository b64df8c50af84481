//! Error types for the segmentation pipeline

use thiserror::Error;

/// Errors raised while streaming, segmenting, or assembling a work
#[derive(Error, Debug)]
pub enum CoreError {
    /// I/O failure on the underlying character stream; fatal to the pipeline
    #[error("I/O error: {0}")]
    Io(String),

    /// The byte stream is not valid UTF-8
    #[error("invalid UTF-8 at byte {position}")]
    Encoding {
        /// Byte offset of the first invalid sequence
        position: u64,
    },

    /// A chapter-rule pattern failed to compile; rejected before streaming starts
    #[error("invalid chapter rule: {0}")]
    ChapterRule(String),

    /// Invalid processor configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The boundary sink was dropped before the stream was fully consumed
    #[error("boundary sink closed before end of stream")]
    SinkClosed,

    /// The detector/assembler staging failed
    #[error("pipeline failed: {0}")]
    Pipeline(String),
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        CoreError::Io(err.to_string())
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
