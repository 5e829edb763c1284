//! Original-text spans carried per token.

use serde::{Deserialize, Serialize};

/// Half-open `[start, end)` span into the original (pre-normalization) text.
///
/// Positions use whatever unit the upstream normalizer aligns on. Merging
/// adds raw offsets, so every encoding combined in one merge must use the
/// same unit. `{0, 0}` marks a token with no source text (padding, special
/// tokens).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offsets {
    pub start: usize,
    pub end: usize,
}

impl Offsets {
    /// Create a new span. `start` must not exceed `end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "offset start {start} past end {end}");
        Self { start, end }
    }

    /// The span used for filler and special tokens.
    pub const fn none() -> Self {
        Self { start: 0, end: 0 }
    }

    /// Width of the span; zero for an inverted span.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `pos` falls inside the half-open span.
    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Shift both ends right by `by`.
    pub fn shifted(self, by: usize) -> Self {
        Self {
            start: self.start + by,
            end: self.end + by,
        }
    }
}

impl From<(usize, usize)> for Offsets {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let span = Offsets::new(3, 6);
        assert!(!span.contains(2));
        assert!(span.contains(3));
        assert!(span.contains(5));
        assert!(!span.contains(6));
    }

    #[test]
    fn empty_span_contains_nothing() {
        assert!(!Offsets::none().contains(0));
        assert!(Offsets::none().is_empty());
    }

    #[test]
    fn inverted_span_has_no_width() {
        let span = Offsets { start: 5, end: 2 };
        assert_eq!(span.len(), 0);
        assert!(!span.contains(3));
        assert_eq!(Offsets::new(2, 5).len(), 3);
    }

    #[test]
    fn shifted_moves_both_ends() {
        assert_eq!(Offsets::new(1, 4).shifted(10), Offsets::new(11, 14));
    }
}
