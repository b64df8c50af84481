//! Input abstraction for the segmentation pipeline
//!
//! The detector only needs a sequential byte stream; this type unifies the
//! sources the outer layers hand us (string, file, stdin, arbitrary reader)
//! behind one seam.

use crate::error::{CoreError, Result};
use std::fs;
use std::io::{Cursor, Read};
use std::path::PathBuf;

/// A sequential source of text to segment.
pub enum Input {
    /// Direct text string
    Text(String),
    /// Raw bytes, decoded as UTF-8 during streaming
    Bytes(Vec<u8>),
    /// File path to stream from
    File(PathBuf),
    /// Arbitrary reader (stdin, sockets, test doubles)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(&text.len()).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl Input {
    /// Create input from a text string.
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from raw bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a file path.
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Create input from a reader.
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Byte length of the input when it is known without reading.
    pub fn estimated_len(&self) -> Option<u64> {
        match self {
            Input::Text(text) => Some(text.len() as u64),
            Input::Bytes(bytes) => Some(bytes.len() as u64),
            Input::File(path) => fs::metadata(path).ok().map(|m| m.len()),
            Input::Reader(_) => None,
        }
    }

    /// Open the input as a byte stream for the detector.
    pub fn into_reader(self) -> Result<Box<dyn Read + Send>> {
        match self {
            Input::Text(text) => Ok(Box::new(Cursor::new(text.into_bytes()))),
            Input::Bytes(bytes) => Ok(Box::new(Cursor::new(bytes))),
            Input::File(path) => {
                let file = fs::File::open(&path).map_err(|e| {
                    CoreError::Io(format!("failed to open {}: {e}", path.display()))
                })?;
                Ok(Box::new(file))
            }
            Input::Reader(reader) => Ok(reader),
        }
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}
