//! Token cursor for navigating the token stream.
//!
//! Besides consumption and lookahead, the cursor remembers every token
//! kind that was probed for and rejected at the current position, so a
//! failure can report the full set of alternatives.

use std::cell::Cell;

use sol_diagnostic::ErrorCode;
use sol_ir::ast::Identifier;
use sol_ir::{Position, Span, StringInterner, Token, TokenKind, TokenList, TokenTag};

use crate::recovery::{TokenSet, CLOSE_DELIM, IDENT_START, OPEN_DELIM};
use crate::ParseError;

/// Stand-in for a token list that lacks its trailing `Eof`.
static EOF: Token = Token::new(TokenKind::Eof, Span::DUMMY, Position::START);

/// Cursor over a [`TokenList`].
///
/// Reads kinds from the list's dense tag array.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    tags: &'a [u8],
    interner: &'a StringInterner,
    pos: usize,
    /// Position the expected set belongs to.
    probed_at: Cell<usize>,
    expected: Cell<TokenSet>,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Cursor {
            tokens,
            tags: tokens.tags(),
            interner,
            pos: 0,
            probed_at: Cell::new(0),
            expected: Cell::new(TokenSet::new()),
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    pub fn tags(&self) -> &'a [u8] {
        self.tags
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Jump to `pos`, forgetting what was probed before.
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(
            pos < self.tokens.len(),
            "cursor position {} out of bounds (max {})",
            pos,
            self.tokens.len()
        );
        self.pos = pos.min(self.last_index());
        self.reset_expected();
    }

    pub fn reset_expected(&self) {
        self.probed_at.set(self.pos);
        self.expected.set(TokenSet::new());
    }

    #[inline]
    fn last_index(&self) -> usize {
        self.tokens.len().saturating_sub(1)
    }

    /// The current token. The cursor never moves past `Eof`.
    #[inline]
    pub fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&EOF)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    #[inline]
    pub fn current_tag(&self) -> TokenTag {
        self.tag_at(self.pos)
    }

    /// Tag of the token at absolute index `index`; `Eof` past the end.
    #[inline]
    pub fn tag_at(&self, index: usize) -> TokenTag {
        self.tags
            .get(index)
            .and_then(|&raw| TokenTag::from_index(raw))
            .unwrap_or(TokenTag::Eof)
    }

    /// Tag `offset` tokens ahead of the current one.
    #[inline]
    pub fn peek_tag(&self, offset: usize) -> TokenTag {
        self.tag_at(self.pos + offset)
    }

    #[inline]
    pub fn peek_next_span(&self) -> Span {
        self.tokens
            .get(self.pos + 1)
            .map_or(self.current_span(), |token| token.span)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.at(TokenTag::Eof)
    }

    /// Whether the current token is `tag`, without recording the probe.
    #[inline]
    pub fn at(&self, tag: TokenTag) -> bool {
        self.tag_at(self.pos) == tag
    }

    /// Whether the current token is `tag`. A miss records `tag` as
    /// expected here.
    #[inline]
    pub fn check(&self, tag: TokenTag) -> bool {
        let hit = self.at(tag);
        if !hit {
            self.note_expected(TokenSet::single(tag));
        }
        hit
    }

    /// Whether the current token is in `set`. A miss records the whole set.
    #[inline]
    pub fn check_set(&self, set: TokenSet) -> bool {
        let hit = set.contains(self.current_tag());
        if !hit {
            self.note_expected(set);
        }
        hit
    }

    pub fn note_expected(&self, set: TokenSet) {
        if self.probed_at.get() != self.pos {
            self.probed_at.set(self.pos);
            self.expected.set(TokenSet::new());
        }
        self.expected.set(self.expected.get().union(set));
    }

    /// Everything probed for and rejected at the current position.
    pub fn expected_here(&self) -> TokenSet {
        if self.probed_at.get() == self.pos {
            self.expected.get()
        } else {
            TokenSet::new()
        }
    }

    /// Consume the current token. Stays on `Eof`.
    #[inline]
    pub fn advance(&mut self) -> Token {
        let token = *self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume `tag` or fail with the expected set at this position.
    pub fn expect(&mut self, tag: TokenTag) -> Result<Token, ParseError> {
        if self.check(tag) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(tag))
        }
    }

    #[cold]
    fn unexpected(&self, tag: TokenTag) -> ParseError {
        let found = self.current_kind().display_name();
        self.error_here(
            ErrorCode::E1001,
            format!("expected {}, found {found}", tag.name()),
        )
    }

    /// An error at the current token carrying the expected set.
    #[cold]
    pub fn error_here(&self, code: ErrorCode, message: impl Into<String>) -> ParseError {
        let token = self.current();
        ParseError::new(
            code,
            message,
            token.span,
            token.position,
            token.kind.display_name(),
        )
        .with_expected(self.expected_here())
    }

    /// Consume a simple or symbol identifier.
    pub fn expect_identifier(&mut self) -> Result<Identifier, ParseError> {
        let token = *self.current();
        match token.kind {
            TokenKind::Ident(name) => {
                self.advance();
                Ok(Identifier::simple(name, token.span))
            }
            TokenKind::Symbol(name) => {
                self.advance();
                Ok(Identifier::symbol(name, token.span))
            }
            other => {
                self.note_expected(IDENT_START);
                Err(self.error_here(
                    ErrorCode::E1004,
                    format!("expected identifier, found {}", other.display_name()),
                ))
            }
        }
    }

    pub fn skip_newlines(&mut self) {
        while self.at(TokenTag::Newline) {
            self.pos += 1;
        }
    }

    /// Consume any run of commas and line breaks; `true` if there was one.
    pub fn eat_separators(&mut self) -> bool {
        let start = self.pos;
        while self.at(TokenTag::Comma) || self.at(TokenTag::Newline) {
            self.pos += 1;
        }
        if self.pos == start {
            self.note_expected(TokenSet::single(TokenTag::Comma).with(TokenTag::Newline));
        }
        self.pos != start
    }

    /// Tag of the first token at or after the current one that is not a
    /// line break.
    pub fn peek_past_newlines(&self) -> TokenTag {
        let mut index = self.pos;
        while self.tag_at(index) == TokenTag::Newline {
            index += 1;
        }
        self.tag_at(index)
    }

    /// True if there is no whitespace between the two spans.
    #[inline]
    pub fn spans_adjacent(&self, left: Span, right: Span) -> bool {
        left.end == right.start
    }

    /// Index of the delimiter closing the group opened at `open`, or
    /// `None` if the group runs to the end of the stream.
    ///
    /// Depth counts all three bracket kinds alike.
    pub fn matching_close(&self, open: usize) -> Option<usize> {
        let mut depth = 0usize;
        for index in open..self.tags.len() {
            let tag = self.tag_at(index);
            if OPEN_DELIM.contains(tag) {
                depth += 1;
            } else if CLOSE_DELIM.contains(tag) {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(index);
                }
            } else if tag == TokenTag::Eof {
                return None;
            }
        }
        None
    }

    /// True if the group opened at the current token is balanced and the
    /// token after it is `follow`.
    pub fn group_followed_by(&self, follow: TokenTag) -> bool {
        self.matching_close(self.pos)
            .is_some_and(|close| self.tag_at(close + 1) == follow)
    }

    /// True if `tag` occurs at bracket depth zero within `start..end`.
    pub fn contains_at_depth_zero(&self, start: usize, end: usize, tag: TokenTag) -> bool {
        let mut depth = 0usize;
        for index in start..end {
            let current = self.tag_at(index);
            if OPEN_DELIM.contains(current) {
                depth += 1;
            } else if CLOSE_DELIM.contains(current) {
                depth = depth.saturating_sub(1);
            } else if depth == 0 && current == tag {
                return true;
            }
        }
        false
    }

    /// Scan forward from the current token at depth zero for `tag`,
    /// stopping at a line break, an unmatched closing delimiter, or any
    /// token in `stop`.
    pub fn scan_line_for(&self, tag: TokenTag, stop: TokenSet) -> bool {
        let mut depth = 0usize;
        let mut index = self.pos;
        loop {
            let current = self.tag_at(index);
            if current == TokenTag::Eof {
                return false;
            }
            if depth == 0 {
                if current == tag {
                    return true;
                }
                if current == TokenTag::Newline || stop.contains(current) {
                    return false;
                }
            }
            if OPEN_DELIM.contains(current) {
                depth += 1;
            } else if CLOSE_DELIM.contains(current) {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            index += 1;
        }
    }
}
