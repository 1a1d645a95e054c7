//! Scroll-reveal bookkeeping.
//!
//! The page-side watcher reports a card index the first time that card is
//! at least [`REVEAL_THRESHOLD`] visible, then stops watching it. The
//! tracker is a set, so a duplicate report is harmless either way.

use std::collections::BTreeSet;

/// Fraction of a card that must be inside the viewport to reveal it
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// CSS class marking a revealed card
pub const VISIBLE_CLASS: &str = "visible";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: BTreeSet<usize>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a card as revealed; true only the first time for that index
    pub fn reveal(&mut self, index: usize) -> bool {
        self.revealed.insert(index)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    /// Forget everything, used when a new set of cards is rendered
    pub fn clear(&mut self) {
        self.revealed.clear();
    }
}
