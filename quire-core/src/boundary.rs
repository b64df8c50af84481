//! Boundary events and their delivery seam

use crate::error::{CoreError, Result};
use crate::unit::Unit;
use std::sync::mpsc::SyncSender;

/// A signal that a unit of text has just ended.
///
/// Events are produced by the boundary detector in strictly increasing
/// `position` order. The `Work` unit is never emitted; the assembler creates
/// the root itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary {
    /// Byte offset where the unit's span begins
    pub position: u64,
    /// Byte length of the span, including trailing whitespace
    pub length: u64,
    /// Rank of the unit that closed
    pub unit: Unit,
    /// The literal token; present on `Word` boundaries only
    pub text: Option<String>,
}

impl Boundary {
    /// Create a boundary event for a non-word unit
    pub fn new(position: u64, length: u64, unit: Unit) -> Self {
        Self {
            position,
            length,
            unit,
            text: None,
        }
    }

    /// Create a word boundary carrying its literal token
    pub fn word(position: u64, length: u64, text: impl Into<String>) -> Self {
        Self {
            position,
            length,
            unit: Unit::Word,
            text: Some(text.into()),
        }
    }
}

/// Ordered destination for boundary events.
///
/// The detector writes through this seam so the assembler can run either
/// synchronously (a `Vec` drained afterwards) or on its own thread behind a
/// bounded channel. Implementations must preserve FIFO order.
pub trait BoundarySink {
    /// Deliver one boundary event.
    fn accept(&mut self, boundary: Boundary) -> Result<()>;
}

impl BoundarySink for Vec<Boundary> {
    fn accept(&mut self, boundary: Boundary) -> Result<()> {
        self.push(boundary);
        Ok(())
    }
}

/// Bounded-channel delivery: `send` blocks while the channel is full, which
/// is the backpressure contract between detector and assembler.
impl BoundarySink for SyncSender<Boundary> {
    fn accept(&mut self, boundary: Boundary) -> Result<()> {
        self.send(boundary).map_err(|_| CoreError::SinkClosed)
    }
}
