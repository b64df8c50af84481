//! Server error types

use thiserror::Error;

/// Errors raised while starting or running the display server
#[derive(Error, Debug)]
pub enum ServerError {
    /// Failed to bind or serve on the configured address
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to build the async runtime
    #[error("runtime error: {0}")]
    Runtime(String),
}
