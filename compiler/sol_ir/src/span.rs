//! Source locations.

use std::fmt;

/// Error when a byte range does not fit a [`Span`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    StartTooLarge(usize),
    EndTooLarge(usize),
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanError::StartTooLarge(v) => write!(f, "span start {v} exceeds u32::MAX"),
            SpanError::EndTooLarge(v) => write!(f, "span end {v} exceeds u32::MAX"),
        }
    }
}

impl std::error::Error for SpanError {}

/// Byte range `start..end` into the source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Span for nodes with no source text.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Convert a byte range, failing if either bound exceeds `u32::MAX`.
    #[inline]
    pub fn try_from_range(range: std::ops::Range<usize>) -> Result<Self, SpanError> {
        let start =
            u32::try_from(range.start).map_err(|_| SpanError::StartTooLarge(range.start))?;
        let end = u32::try_from(range.end).map_err(|_| SpanError::EndTooLarge(range.end))?;
        Ok(Span { start, end })
    }

    /// Shift both bounds right by `offset` bytes.
    #[inline]
    #[must_use]
    pub const fn shifted(self, offset: u32) -> Span {
        Span {
            start: self.start + offset,
            end: self.end + offset,
        }
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Smallest span covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Zero-length span at `offset`.
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span {
            start: offset,
            end: offset,
        }
    }

    #[inline]
    pub fn to_range(self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }

    /// The source text this span covers, or `""` if it is out of bounds.
    pub fn slice(self, source: &str) -> &str {
        source.get(self.to_range()).unwrap_or("")
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// 1-based line and column (column counted in characters).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub const START: Position = Position { line: 1, column: 1 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn merge_covers_both() {
        let a = Span::new(4, 8);
        let b = Span::new(1, 5);
        assert_eq!(a.merge(b), Span::new(1, 8));
        assert_eq!(b.merge(a), Span::new(1, 8));
    }

    #[test]
    fn point_is_empty() {
        let p = Span::point(3);
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
        assert!(!p.contains(3));
    }

    #[test]
    fn shifted_moves_both_bounds() {
        assert_eq!(Span::new(0, 4).shifted(10), Span::new(10, 14));
    }

    #[test]
    fn try_from_range_rejects_oversized() {
        let big = u32::MAX as usize + 1;
        assert_eq!(
            Span::try_from_range(0..big),
            Err(SpanError::EndTooLarge(big))
        );
        assert_eq!(Span::try_from_range(2..5), Ok(Span::new(2, 5)));
    }

    #[test]
    fn slice_out_of_bounds_is_empty() {
        let src = "abc";
        assert_eq!(Span::new(1, 3).slice(src), "bc");
        assert_eq!(Span::new(1, 30).slice(src), "");
    }

    #[test]
    fn position_display() {
        assert_eq!(Position::new(3, 14).to_string(), "3:14");
        assert_eq!(Position::default(), Position::START);
    }
}
