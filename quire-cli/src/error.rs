//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid chapter-rule pattern
    InvalidRule(String),
    /// Configuration error
    ConfigError(String),
    /// Processing error from core
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidRule(pattern) => write!(f, "Invalid chapter rule: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_prefixed() {
        assert_eq!(
            CliError::FileNotFound("book.txt".to_string()).to_string(),
            "File not found: book.txt"
        );
        assert_eq!(
            CliError::InvalidRule("[oops".to_string()).to_string(),
            "Invalid chapter rule: [oops"
        );
        assert_eq!(
            CliError::ConfigError("bad field".to_string()).to_string(),
            "Configuration error: bad field"
        );
        assert_eq!(
            CliError::ProcessingError("stream broke".to_string()).to_string(),
            "Processing error: stream broke"
        );
    }

    #[test]
    fn cli_error_is_a_std_error() {
        let error = CliError::ProcessingError("boom".to_string());
        let _: &dyn std::error::Error = &error;
    }
}
