//! Raw token cooking.
//!
//! Turns a [`RawToken`] and its source slice into a [`TokenKind`]: interns
//! names, resolves escapes, parses numbers and splits comments from
//! doc-strings.

use sol_ir::token::Radix;
use sol_ir::{Name, StringInterner, TokenKind};

use crate::escape::{unescape_char, unescape_string};
use crate::lex_error::LexErrorKind;
use crate::parse_helpers::{parse_float_literal, parse_int_literal};
use crate::raw_token::RawToken;

pub(crate) enum Cooked {
    Token(TokenKind),
    /// Ordinary `//` comment, text after the slashes.
    Comment(Name),
}

/// Strip the surrounding quotes of a string or char literal.
fn literal_body(slice: &str) -> &str {
    slice.get(1..slice.len().saturating_sub(1)).unwrap_or("")
}

pub(crate) fn cook(
    raw: RawToken,
    slice: &str,
    interner: &StringInterner,
) -> Result<Cooked, LexErrorKind> {
    let kind = match raw {
        RawToken::LineComment => {
            let text = slice[2..].trim_end_matches('\r');
            return Ok(match text.strip_prefix('!') {
                Some(doc) => {
                    let doc = doc.strip_prefix(' ').unwrap_or(doc);
                    Cooked::Token(TokenKind::DocString(interner.intern(doc)))
                }
                None => Cooked::Comment(interner.intern(text)),
            });
        }
        RawToken::Newline => TokenKind::Newline,

        RawToken::Using => TokenKind::Using,
        RawToken::Inductive => TokenKind::Inductive,
        RawToken::Public => TokenKind::Public,
        RawToken::Sealed => TokenKind::Sealed,
        RawToken::Private => TokenKind::Private,
        RawToken::Internal => TokenKind::Internal,
        RawToken::If => TokenKind::If,
        RawToken::Then => TokenKind::Then,
        RawToken::Else => TokenKind::Else,
        RawToken::Match => TokenKind::Match,
        RawToken::Return => TokenKind::Return,
        RawToken::Is => TokenKind::Is,
        RawToken::Let => TokenKind::Let,
        RawToken::Universe => TokenKind::Universe,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::At => TokenKind::At,
        RawToken::Hash => TokenKind::Hash,
        RawToken::Caret => TokenKind::Caret,
        RawToken::Quote => TokenKind::Quote,
        RawToken::Arrow => TokenKind::Arrow,
        RawToken::FatArrow => TokenKind::FatArrow,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::Dot => TokenKind::Dot,
        RawToken::DotDot => TokenKind::DotDot,

        RawToken::Operator => TokenKind::Operator(interner.intern(slice)),
        RawToken::Symbol => TokenKind::Symbol(interner.intern(&slice[1..])),
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),

        RawToken::HexInt => TokenKind::Int(parse_int_literal(slice, Radix::Hex)?),
        RawToken::OctInt => TokenKind::Int(parse_int_literal(slice, Radix::Octal)?),
        RawToken::BinInt => TokenKind::Int(parse_int_literal(slice, Radix::Binary)?),
        RawToken::Int => TokenKind::Int(parse_int_literal(slice, Radix::Decimal)?),
        RawToken::Float => TokenKind::Float(parse_float_literal(slice)?),

        RawToken::String => {
            let text = unescape_string(literal_body(slice))?;
            TokenKind::String(interner.intern(&text))
        }
        RawToken::Char => TokenKind::Char(unescape_char(literal_body(slice))?),
        RawToken::UnterminatedString => return Err(LexErrorKind::UnterminatedString),
        RawToken::UnterminatedChar => return Err(LexErrorKind::UnterminatedChar),
    };
    Ok(Cooked::Token(kind))
}
