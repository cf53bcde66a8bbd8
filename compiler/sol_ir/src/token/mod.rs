//! Tokens produced by the lexer.

mod list;
mod literal;

pub use list::TokenList;
pub use literal::{FloatLit, IntLit, NumericSuffix, Radix};

use std::fmt;

use crate::{Name, Position, Span};

/// A token: kind, byte span and the line/column where it starts.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub position: Position,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span, position: Position) -> Self {
        Token {
            kind,
            span,
            position,
        }
    }
}

/// Token kinds for sol.
///
/// Every payload is `Copy`; strings are interned.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Int(IntLit),
    Float(FloatLit),
    /// String literal, escapes resolved.
    String(Name),
    Char(char),

    /// Simple identifier: `Nat`, `succ$`, `x'`.
    Ident(Name),
    /// Symbol identifier, backtick stripped: `` `+ `` holds `+`.
    Symbol(Name),
    /// Infix operator: any run of operator characters that is not reserved.
    Operator(Name),

    /// `//!` comment text.
    DocString(Name),
    /// First line of the file when it starts with `#!`.
    HashBang(Name),

    Using,
    Inductive,
    Public,
    Sealed,
    Private,
    Internal,
    If,
    Then,
    Else,
    Match,
    Return,
    Is,
    Let,
    /// `U`
    Universe,

    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    /// `->`
    Arrow,
    /// `=>`
    FatArrow,
    Eq,
    Pipe,
    Dot,
    DotDot,
    At,
    Hash,
    Caret,
    /// `'` opening a forall parameter.
    Quote,

    /// One run of `\n`, `\r\n` or `;`.
    Newline,
    Eof,
}

/// Dense discriminant of [`TokenKind`], one per variant.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenTag {
    Int,
    Float,
    String,
    Char,
    Ident,
    Symbol,
    Operator,
    DocString,
    HashBang,
    Using,
    Inductive,
    Public,
    Sealed,
    Private,
    Internal,
    If,
    Then,
    Else,
    Match,
    Return,
    Is,
    Let,
    Universe,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    Arrow,
    FatArrow,
    Eq,
    Pipe,
    Dot,
    DotDot,
    At,
    Hash,
    Caret,
    Quote,
    Newline,
    Eof,
}

impl TokenTag {
    pub const COUNT: usize = TokenTag::Eof as usize + 1;

    /// All tags in discriminant order.
    pub const ALL: [TokenTag; TokenTag::COUNT] = [
        TokenTag::Int,
        TokenTag::Float,
        TokenTag::String,
        TokenTag::Char,
        TokenTag::Ident,
        TokenTag::Symbol,
        TokenTag::Operator,
        TokenTag::DocString,
        TokenTag::HashBang,
        TokenTag::Using,
        TokenTag::Inductive,
        TokenTag::Public,
        TokenTag::Sealed,
        TokenTag::Private,
        TokenTag::Internal,
        TokenTag::If,
        TokenTag::Then,
        TokenTag::Else,
        TokenTag::Match,
        TokenTag::Return,
        TokenTag::Is,
        TokenTag::Let,
        TokenTag::Universe,
        TokenTag::LParen,
        TokenTag::RParen,
        TokenTag::LBracket,
        TokenTag::RBracket,
        TokenTag::LBrace,
        TokenTag::RBrace,
        TokenTag::Comma,
        TokenTag::Colon,
        TokenTag::Arrow,
        TokenTag::FatArrow,
        TokenTag::Eq,
        TokenTag::Pipe,
        TokenTag::Dot,
        TokenTag::DotDot,
        TokenTag::At,
        TokenTag::Hash,
        TokenTag::Caret,
        TokenTag::Quote,
        TokenTag::Newline,
        TokenTag::Eof,
    ];

    #[inline]
    pub fn from_index(index: u8) -> Option<TokenTag> {
        Self::ALL.get(index as usize).copied()
    }

    /// Human-readable name for error messages.
    pub const fn name(self) -> &'static str {
        match self {
            TokenTag::Int => "integer",
            TokenTag::Float => "float",
            TokenTag::String => "string",
            TokenTag::Char => "char",
            TokenTag::Ident => "identifier",
            TokenTag::Symbol => "symbol identifier",
            TokenTag::Operator => "operator",
            TokenTag::DocString => "doc-string",
            TokenTag::HashBang => "hash-bang",
            TokenTag::Using => "`using`",
            TokenTag::Inductive => "`inductive`",
            TokenTag::Public => "`public`",
            TokenTag::Sealed => "`sealed`",
            TokenTag::Private => "`private`",
            TokenTag::Internal => "`internal`",
            TokenTag::If => "`if`",
            TokenTag::Then => "`then`",
            TokenTag::Else => "`else`",
            TokenTag::Match => "`match`",
            TokenTag::Return => "`return`",
            TokenTag::Is => "`is`",
            TokenTag::Let => "`let`",
            TokenTag::Universe => "`U`",
            TokenTag::LParen => "`(`",
            TokenTag::RParen => "`)`",
            TokenTag::LBracket => "`[`",
            TokenTag::RBracket => "`]`",
            TokenTag::LBrace => "`{`",
            TokenTag::RBrace => "`}`",
            TokenTag::Comma => "`,`",
            TokenTag::Colon => "`:`",
            TokenTag::Arrow => "`->`",
            TokenTag::FatArrow => "`=>`",
            TokenTag::Eq => "`=`",
            TokenTag::Pipe => "`|`",
            TokenTag::Dot => "`.`",
            TokenTag::DotDot => "`..`",
            TokenTag::At => "`@`",
            TokenTag::Hash => "`#`",
            TokenTag::Caret => "`^`",
            TokenTag::Quote => "`'`",
            TokenTag::Newline => "line break",
            TokenTag::Eof => "end of file",
        }
    }
}

impl TokenKind {
    /// Dense tag for this kind; payloads are ignored.
    pub const fn tag(&self) -> TokenTag {
        match self {
            TokenKind::Int(_) => TokenTag::Int,
            TokenKind::Float(_) => TokenTag::Float,
            TokenKind::String(_) => TokenTag::String,
            TokenKind::Char(_) => TokenTag::Char,
            TokenKind::Ident(_) => TokenTag::Ident,
            TokenKind::Symbol(_) => TokenTag::Symbol,
            TokenKind::Operator(_) => TokenTag::Operator,
            TokenKind::DocString(_) => TokenTag::DocString,
            TokenKind::HashBang(_) => TokenTag::HashBang,
            TokenKind::Using => TokenTag::Using,
            TokenKind::Inductive => TokenTag::Inductive,
            TokenKind::Public => TokenTag::Public,
            TokenKind::Sealed => TokenTag::Sealed,
            TokenKind::Private => TokenTag::Private,
            TokenKind::Internal => TokenTag::Internal,
            TokenKind::If => TokenTag::If,
            TokenKind::Then => TokenTag::Then,
            TokenKind::Else => TokenTag::Else,
            TokenKind::Match => TokenTag::Match,
            TokenKind::Return => TokenTag::Return,
            TokenKind::Is => TokenTag::Is,
            TokenKind::Let => TokenTag::Let,
            TokenKind::Universe => TokenTag::Universe,
            TokenKind::LParen => TokenTag::LParen,
            TokenKind::RParen => TokenTag::RParen,
            TokenKind::LBracket => TokenTag::LBracket,
            TokenKind::RBracket => TokenTag::RBracket,
            TokenKind::LBrace => TokenTag::LBrace,
            TokenKind::RBrace => TokenTag::RBrace,
            TokenKind::Comma => TokenTag::Comma,
            TokenKind::Colon => TokenTag::Colon,
            TokenKind::Arrow => TokenTag::Arrow,
            TokenKind::FatArrow => TokenTag::FatArrow,
            TokenKind::Eq => TokenTag::Eq,
            TokenKind::Pipe => TokenTag::Pipe,
            TokenKind::Dot => TokenTag::Dot,
            TokenKind::DotDot => TokenTag::DotDot,
            TokenKind::At => TokenTag::At,
            TokenKind::Hash => TokenTag::Hash,
            TokenKind::Caret => TokenTag::Caret,
            TokenKind::Quote => TokenTag::Quote,
            TokenKind::Newline => TokenTag::Newline,
            TokenKind::Eof => TokenTag::Eof,
        }
    }

    #[inline]
    pub const fn discriminant_index(&self) -> u8 {
        self.tag() as u8
    }

    pub const fn display_name(&self) -> &'static str {
        self.tag().name()
    }

    /// Keyword for a reserved word, if `text` is one.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        Some(match text {
            "using" => TokenKind::Using,
            "inductive" => TokenKind::Inductive,
            "public" => TokenKind::Public,
            "sealed" => TokenKind::Sealed,
            "private" => TokenKind::Private,
            "internal" => TokenKind::Internal,
            "if" => TokenKind::If,
            "then" => TokenKind::Then,
            "else" => TokenKind::Else,
            "match" => TokenKind::Match,
            "return" => TokenKind::Return,
            "is" => TokenKind::Is,
            "let" => TokenKind::Let,
            "U" => TokenKind::Universe,
            _ => return None,
        })
    }

    /// `public`, `sealed`, `private` or `internal`.
    pub const fn is_visibility(&self) -> bool {
        matches!(
            self,
            TokenKind::Public | TokenKind::Sealed | TokenKind::Private | TokenKind::Internal
        )
    }

    /// Fixed source text for kinds without a payload.
    pub const fn fixed_text(&self) -> Option<&'static str> {
        Some(match self {
            TokenKind::Using => "using",
            TokenKind::Inductive => "inductive",
            TokenKind::Public => "public",
            TokenKind::Sealed => "sealed",
            TokenKind::Private => "private",
            TokenKind::Internal => "internal",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::Match => "match",
            TokenKind::Return => "return",
            TokenKind::Is => "is",
            TokenKind::Let => "let",
            TokenKind::Universe => "U",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Arrow => "->",
            TokenKind::FatArrow => "=>",
            TokenKind::Eq => "=",
            TokenKind::Pipe => "|",
            TokenKind::Dot => ".",
            TokenKind::DotDot => "..",
            TokenKind::At => "@",
            TokenKind::Hash => "#",
            TokenKind::Caret => "^",
            TokenKind::Quote => "'",
            _ => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
