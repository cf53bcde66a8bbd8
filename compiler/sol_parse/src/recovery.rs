//! Token sets and declaration-level resynchronization.
//!
//! A [`TokenSet`] is a bitset over [`TokenTag`] discriminants. The cursor
//! accumulates one while probing so a syntax error can report everything
//! that would have been accepted at the failure point.

use sol_ir::TokenTag;

/// A set of token tags with O(1) membership.
///
/// One bit per [`TokenTag`]; 43 tags fit in a `u64`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TokenSet(u64);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn single(tag: TokenTag) -> Self {
        Self(1u64 << tag as u8)
    }

    #[inline]
    #[must_use]
    pub const fn with(self, tag: TokenTag) -> Self {
        Self(self.0 | (1u64 << tag as u8))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(&self, tag: TokenTag) -> bool {
        (self.0 & (1u64 << tag as u8)) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Members in discriminant order.
    pub fn iter(self) -> impl Iterator<Item = TokenTag> {
        TokenTag::ALL.into_iter().filter(move |tag| self.contains(*tag))
    }

    /// Display names of the members, for diagnostics.
    pub fn names(self) -> Vec<&'static str> {
        self.iter().map(TokenTag::name).collect()
    }
}

/// Tokens that can begin a path.
pub const IDENT_START: TokenSet = TokenSet::single(TokenTag::Ident).with(TokenTag::Symbol);

pub const LITERAL: TokenSet = TokenSet::new()
    .with(TokenTag::Int)
    .with(TokenTag::Float)
    .with(TokenTag::String)
    .with(TokenTag::Char);

/// Tokens that can be an application argument.
pub const ARG_START: TokenSet = LITERAL
    .union(IDENT_START)
    .with(TokenTag::Caret)
    .with(TokenTag::LParen)
    .with(TokenTag::LBracket)
    .with(TokenTag::Universe);

/// Tokens that can begin a primary expression.
pub const PRIMARY_START: TokenSet = ARG_START
    .with(TokenTag::If)
    .with(TokenTag::Match)
    .with(TokenTag::Return);

/// Tokens that can begin any expression.
pub const EXPR_START: TokenSet = PRIMARY_START.with(TokenTag::Pipe);

pub const PATTERN_START: TokenSet = LITERAL
    .union(IDENT_START)
    .with(TokenTag::LParen)
    .with(TokenTag::DotDot);

/// Infix positions: `|` and spaced `.` double as operators.
pub const BINARY_OP: TokenSet = TokenSet::new()
    .with(TokenTag::Operator)
    .with(TokenTag::Pipe)
    .with(TokenTag::Dot);

pub const OPEN_DELIM: TokenSet = TokenSet::new()
    .with(TokenTag::LParen)
    .with(TokenTag::LBracket)
    .with(TokenTag::LBrace);

pub const CLOSE_DELIM: TokenSet = TokenSet::new()
    .with(TokenTag::RParen)
    .with(TokenTag::RBracket)
    .with(TokenTag::RBrace);

/// Tokens that can begin a declaration after its attachments.
pub const DECL_START: TokenSet = IDENT_START
    .with(TokenTag::Using)
    .with(TokenTag::Inductive)
    .with(TokenTag::Hash)
    .with(TokenTag::Public)
    .with(TokenTag::Sealed)
    .with(TokenTag::Private)
    .with(TokenTag::Internal)
    .with(TokenTag::DocString)
    .with(TokenTag::At);

/// Where to resume after an error at `error_index` inside the declaration
/// starting at `decl_start`.
///
/// Rescans the declaration tracking bracket depth and returns the first
/// depth-zero line break at or after the error. If the brackets never
/// balance, falls back to the next line break of any depth, then to the
/// last line break before the error, then to the final `Eof`.
pub fn resync_point(tags: &[u8], decl_start: usize, error_index: usize) -> usize {
    let newline = TokenTag::Newline as u8;
    let last = tags.len().saturating_sub(1);
    let mut depth = 0usize;

    for (index, &raw) in tags.iter().enumerate().skip(decl_start) {
        let Some(tag) = TokenTag::from_index(raw) else {
            continue;
        };
        if OPEN_DELIM.contains(tag) {
            depth += 1;
        } else if CLOSE_DELIM.contains(tag) {
            depth = depth.saturating_sub(1);
        } else if raw == newline && depth == 0 && index >= error_index {
            return index;
        }
    }

    if let Some(index) = (error_index..tags.len()).find(|&index| tags[index] == newline) {
        return index;
    }
    // An unclosed group swallowed the line breaks before the error; give
    // back the lines after the last one.
    (decl_start + 1..error_index.min(tags.len()))
        .rev()
        .find(|&index| tags[index] == newline)
        .unwrap_or(last)
}

#[cfg(test)]
mod tests;
