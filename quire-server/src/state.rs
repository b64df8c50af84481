//! Shared application state

use quire_core::{Node, Thresholds};
use std::sync::Arc;

/// State shared by every handler: the immutable work plus the query
/// parameters chosen at startup.
///
/// The tree is behind an `Arc` only for sharing; handlers never mutate it,
/// so concurrent requests need no locking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The processed work
    pub root: Arc<Node>,
    /// Confirmation thresholds for the character queries
    pub thresholds: Thresholds,
    /// Top characters per chapter profile
    pub top_characters: usize,
}

impl AppState {
    /// Create state over a processed work with default query parameters.
    pub fn new(root: Node) -> Self {
        Self {
            root: Arc::new(root),
            thresholds: Thresholds::default(),
            top_characters: 3,
        }
    }
}
