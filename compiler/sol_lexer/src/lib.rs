//! Lexer for sol.
//!
//! A logos-generated scanner ([`raw_token`]) finds token boundaries; the
//! cooking layer ([`convert`]) interns names, resolves escapes and parses
//! numeric literals; [`lex`] stitches the results into a [`TokenList`] with
//! byte spans and line/column positions.
//!
//! `//` comments are dropped from the token stream (see
//! [`lex_with_comments`] to keep them); `//!` doc-strings stay in it for
//! the parser to attach.

mod convert;
mod escape;
mod lex_error;
mod parse_helpers;
mod raw_token;

use logos::Logos;
use sol_ir::{Name, Position, Span, StringInterner, Token, TokenKind, TokenList};
use tracing::debug;

use crate::convert::Cooked;
use crate::raw_token::RawToken;

pub use lex_error::{LexError, LexErrorKind};

/// An ordinary `//` comment.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Comment {
    /// Text after `//`.
    pub text: Name,
    pub span: Span,
}

/// Tokens plus the comments that were left out of them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub comments: Vec<Comment>,
}

/// Lex `source`; comments are discarded.
pub fn lex(source: &str, interner: &StringInterner) -> Result<TokenList, LexError> {
    lex_with_comments(source, interner).map(|output| output.tokens)
}

/// Lex `source`, returning comments alongside the tokens.
pub fn lex_with_comments(source: &str, interner: &StringInterner) -> Result<LexOutput, LexError> {
    if u32::try_from(source.len()).is_err() {
        return Err(LexError::new(
            LexErrorKind::SourceTooLarge { len: source.len() },
            Span::DUMMY,
            Position::START,
        ));
    }

    let mut output = LexOutput {
        tokens: TokenList::with_capacity(source.len() / 3 + 1),
        comments: Vec::new(),
    };
    let mut tracker = PositionTracker::new(source);

    let body_start = hash_bang_len(source);
    if body_start > 0 {
        let text = source[2..body_start].trim_end_matches(['\r', '\n']);
        output.tokens.push(Token::new(
            TokenKind::HashBang(interner.intern(text)),
            span_of(0, body_start),
            Position::START,
        ));
    }

    let mut lexer = RawToken::lexer(&source[body_start..]);
    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let span = span_of(range.start + body_start, range.end + body_start);
        let position = tracker.advance_to(span.start as usize);

        let Ok(raw) = result else {
            let found = lexer.slice().chars().next().unwrap_or('\0');
            return Err(LexError::new(
                LexErrorKind::UnexpectedChar { found },
                span,
                position,
            ));
        };

        match convert::cook(raw, lexer.slice(), interner) {
            Ok(Cooked::Token(kind)) => output.tokens.push(Token::new(kind, span, position)),
            Ok(Cooked::Comment(text)) => output.comments.push(Comment { text, span }),
            Err(kind) => return Err(LexError::new(kind, span, position)),
        }
    }

    let end = span_of(source.len(), source.len());
    let position = tracker.advance_to(source.len());
    output.tokens.push(Token::new(TokenKind::Eof, end, position));

    debug!(
        tokens = output.tokens.len(),
        comments = output.comments.len(),
        "lexed source"
    );
    Ok(output)
}

/// Length of the `#!` line including its line break, or 0.
fn hash_bang_len(source: &str) -> usize {
    if !source.starts_with("#!") {
        return 0;
    }
    source.find('\n').map_or(source.len(), |newline| newline + 1)
}

/// Callers have already checked that `source.len()` fits in `u32`.
fn span_of(start: usize, end: usize) -> Span {
    Span::try_from_range(start..end).unwrap_or(Span::DUMMY)
}

/// Incremental byte offset to line/column conversion.
///
/// Offsets passed to [`advance_to`](Self::advance_to) never decrease, so
/// the whole source is scanned once.
struct PositionTracker<'a> {
    source: &'a str,
    offset: usize,
    line: u32,
    column: u32,
}

impl<'a> PositionTracker<'a> {
    fn new(source: &'a str) -> Self {
        PositionTracker {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    fn advance_to(&mut self, offset: usize) -> Position {
        if let Some(skipped) = self.source.get(self.offset..offset) {
            for c in skipped.chars() {
                if c == '\n' {
                    self.line += 1;
                    self.column = 1;
                } else {
                    self.column += 1;
                }
            }
            self.offset = offset;
        }
        Position::new(self.line, self.column)
    }
}
