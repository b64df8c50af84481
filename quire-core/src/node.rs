//! The assembled structural tree

use crate::cursor::{Nodes, TreeCursor};
use crate::unit::Unit;

/// Sentinel span value for nodes created by the assembler's final fold
/// rather than by an explicit boundary event.
pub const SYNTHETIC_SPAN: i64 = -1;

/// One element of the structural tree: a contiguous span of the source text
/// at a single granularity.
///
/// `text` is populated only for `Word` nodes; every other unit derives its
/// text by concatenating descendants. Children are strictly one rank below
/// the parent and ordered by source position. The tree is immutable once the
/// assembler hands it over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Granularity rank of this span
    pub unit: Unit,
    /// Byte offset into the source, or [`SYNTHETIC_SPAN`]
    pub position: i64,
    /// Byte length of the span, or [`SYNTHETIC_SPAN`]
    pub length: i64,
    /// Literal token text; empty for non-word nodes
    pub text: String,
    /// Ordered child nodes, one rank below; always empty for words
    pub children: Vec<Node>,
}

impl Node {
    /// Create a word leaf.
    pub fn word(position: i64, length: i64, text: impl Into<String>) -> Self {
        Self {
            unit: Unit::Word,
            position,
            length,
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Create an interior node adopting an already-ordered child list.
    pub fn interior(unit: Unit, position: i64, length: i64, children: Vec<Node>) -> Self {
        Self {
            unit,
            position,
            length,
            text: String::new(),
            children,
        }
    }

    /// Create a node with sentinel span for content not closed by an
    /// explicit boundary.
    pub fn synthetic(unit: Unit, children: Vec<Node>) -> Self {
        Self::interior(unit, SYNTHETIC_SPAN, SYNTHETIC_SPAN, children)
    }

    /// Create the `Work` root over a chapter list.
    pub fn root(chapters: Vec<Node>) -> Self {
        Self::interior(Unit::Work, 0, 0, chapters)
    }

    /// True when this node was created by the assembler's final fold.
    pub fn is_synthetic(&self) -> bool {
        self.position == SYNTHETIC_SPAN
    }

    /// Open a fresh depth-tracking cursor positioned before this node.
    pub fn cursor(&self) -> TreeCursor<'_> {
        TreeCursor::new(self)
    }

    /// Plain pre-order iterator over the subtree, this node included.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes::new(self)
    }
}
