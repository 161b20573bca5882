//! # Spans
//!
//! Byte ranges into the user's notation, so errors and warnings can point at
//! the characters that caused them.
//!
//! ```rust
//! use conway_notation::Span;
//!
//! let span = Span::new(0, 2);
//! assert_eq!(span.slice("k3aC"), "k3");
//! assert_eq!(span.to_string(), "0..2");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-open byte range `start..end`.
///
/// Validated notation is ASCII, so bytes and characters line up. Spans of
/// rejected input may cover one multi-byte character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The covered text, or `""` when the span does not fit `source`.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_span_is_empty() {
        assert_eq!(Span::new(10, 5).len(), 0);
        assert!(Span::new(10, 5).is_empty());
        assert!(!Span::new(0, 1).is_empty());
    }

    #[test]
    fn test_slice_of_seed_argument() {
        assert_eq!(Span::new(1, 3).slice("k12C"), "12");
        assert_eq!(Span::new(3, 9).slice("k12C"), "");
    }

    #[test]
    fn test_slice_inside_multibyte_character() {
        // "é" occupies bytes 1..3
        assert_eq!(Span::new(1, 2).slice("aéC"), "");
        assert_eq!(Span::new(1, 3).slice("aéC"), "é");
    }
}
