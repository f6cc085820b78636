//! Source location tracking for tokens and diagnostics.

#[cfg(feature = "serde")]
use serde::Serialize;

/// A byte range in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates an empty span at `offset`.
    #[must_use]
    pub const fn point(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Returns the length of the span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the smallest span covering both `self` and `other`.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Resolves the start of the span to a 1-based `(line, column)` pair.
    ///
    /// Columns count characters, not bytes. Offsets past the end of
    /// `source` resolve to the position just after its last character.
    #[must_use]
    pub fn line_col(&self, source: &str) -> (usize, usize) {
        let mut line = 1;
        let mut col = 1;
        for (offset, c) in source.char_indices() {
            if offset >= self.start {
                break;
            }
            if c == '\n' {
                line += 1;
                col = 1;
            } else {
                col += 1;
            }
        }
        (line, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_point_is_empty() {
        let span = Span::point(7);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
        assert_eq!(span.start, 7);
    }

    #[test]
    fn test_span_merge() {
        let merged = Span::new(8, 15).merge(Span::new(5, 10));
        assert_eq!(merged, Span::new(5, 15));
    }

    #[test]
    fn test_line_col_single_line() {
        let source = "select a from t";
        assert_eq!(Span::new(0, 6).line_col(source), (1, 1));
        assert_eq!(Span::new(14, 15).line_col(source), (1, 15));
    }

    #[test]
    fn test_line_col_multi_line() {
        let source = "select a\nfrom t\n  where x";
        let offset = source.find("where").unwrap();
        assert_eq!(Span::point(offset).line_col(source), (3, 3));
    }

    #[test]
    fn test_line_col_past_end() {
        assert_eq!(Span::point(99).line_col("ab"), (1, 3));
    }
}
