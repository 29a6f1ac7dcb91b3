//! Memoization of rendered nodes
//!
//! A rendering is reusable when the same node is printed again from an equal [`PrinterState`]:
//! the captured text and the state it left behind are replayed instead of printing the node.

use std::fmt;

use super::buffer::{OutputBuffer, PrinterState};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(super) struct MemoKey<K> {
    pub(super) node: K,
    pub(super) state: PrinterState,
}

#[derive(Debug, Clone)]
pub(super) struct CachedRendering {
    pub(super) text: String,
    pub(super) state_on_stop: PrinterState,
}

/// Handle for a node being rendered; pass it back to [`super::Printer::memoize_stop`].
#[derive(Debug)]
#[must_use = "a started memoization must be stopped"]
pub struct Memoize<K> {
    pub(super) key: Option<MemoKey<K>>,
    pub(super) buffer: Option<OutputBuffer>,
}

impl<K> Memoize<K> {
    pub(super) fn disabled() -> Self {
        Self { key: None, buffer: None }
    }

    /// Whether this handle records into the memo cache.
    pub fn is_recording(&self) -> bool {
        self.buffer.is_some()
    }
}

/// Memo cache statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoStats {
    pub entries: usize,
    pub reuse: usize,
}

impl MemoStats {
    /// Replays per cached rendering; zero for an empty cache.
    pub fn ratio(&self) -> f32 {
        if self.entries == 0 {
            0.0
        } else {
            self.reuse as f32 / self.entries as f32
        }
    }
}

impl fmt::Display for MemoStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>6} / {:>6} / {:.2}", self.entries, self.reuse, self.ratio())
    }
}
