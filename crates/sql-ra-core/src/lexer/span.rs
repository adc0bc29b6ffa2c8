//! Source location tracking for tokens and diagnostics.

/// Represents a span in the source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

    /// Returns the 1-based line and column of the span start within `source`.
    ///
    /// Columns count characters, not bytes. Offsets past the end of the
    /// source are clamped to its end.
    #[must_use]
    pub fn line_col(&self, source: &str) -> (usize, usize) {
        let mut offset = self.start.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &source[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        (line, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_first_line() {
        assert_eq!(Span::new(0, 6).line_col("SELECT a.id"), (1, 1));
        assert_eq!(Span::new(7, 11).line_col("SELECT a.id"), (1, 8));
    }

    #[test]
    fn test_line_col_multiline() {
        let source = "SELECT a.id\nFROM a\n  WHERE";
        assert_eq!(Span::new(12, 16).line_col(source), (2, 1));
        assert_eq!(Span::new(21, 26).line_col(source), (3, 3));
    }

    #[test]
    fn test_line_col_past_end() {
        assert_eq!(Span::new(99, 99).line_col("ab\ncd"), (2, 3));
    }
}
