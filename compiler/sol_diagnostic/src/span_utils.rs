//! Byte offset to line/column conversion.

use sol_ir::{Position, Span};

/// Byte offset of every line start, for O(log L) lookups.
///
/// ```
/// use sol_diagnostic::span_utils::LineOffsetTable;
/// use sol_ir::Position;
///
/// let source = "Nat : U\nZero : Nat";
/// let table = LineOffsetTable::build(source);
/// assert_eq!(table.position(source, 8), Position::new(2, 1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let index = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(index).unwrap_or(u32::MAX - 1) + 1
    }

    /// 1-based line and character column of `offset`.
    pub fn position(&self, source: &str, offset: u32) -> Position {
        let line = self.line_from_offset(offset);
        let start = self.line_start_offset(line).unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len());
        let column = source
            .get(start..end)
            .map_or(0, |text| text.chars().count());
        Position::new(line, u32::try_from(column).unwrap_or(u32::MAX - 1) + 1)
    }

    /// Byte offset where 1-based `line` starts.
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.offsets.get((line - 1) as usize).copied()
    }

    /// Text of 1-based `line` without its line break.
    pub fn line_text<'s>(&self, source: &'s str, line: u32) -> Option<&'s str> {
        let start = self.line_start_offset(line)? as usize;
        let end = self
            .line_start_offset(line + 1)
            .map_or(source.len(), |next| next as usize);
        source
            .get(start..end)
            .map(|text| text.trim_end_matches(['\n', '\r']))
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

/// Position of `span.start`, for one-off lookups.
pub fn span_position(source: &str, span: Span) -> Position {
    LineOffsetTable::build(source).position(source, span.start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn positions_across_lines() {
        let source = "ab\ncd\n\nef";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.position(source, 0), Position::new(1, 1));
        assert_eq!(table.position(source, 1), Position::new(1, 2));
        assert_eq!(table.position(source, 3), Position::new(2, 1));
        assert_eq!(table.position(source, 6), Position::new(3, 1));
        assert_eq!(table.position(source, 8), Position::new(4, 2));
        assert_eq!(table.line_count(), 4);
    }

    #[test]
    fn columns_count_characters() {
        let source = "λx → y";
        let table = LineOffsetTable::build(source);
        // 'x' is one char after the two-byte lambda
        assert_eq!(table.position(source, 2), Position::new(1, 2));
    }

    #[test]
    fn line_text_strips_break() {
        let source = "first\r\nsecond\nthird";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.line_text(source, 1), Some("first"));
        assert_eq!(table.line_text(source, 2), Some("second"));
        assert_eq!(table.line_text(source, 3), Some("third"));
        assert_eq!(table.line_text(source, 4), None);
        assert_eq!(table.line_start_offset(0), None);
    }

    #[test]
    fn span_position_one_off() {
        assert_eq!(
            span_position("a\n  b", Span::new(4, 5)),
            Position::new(2, 3)
        );
    }
}
