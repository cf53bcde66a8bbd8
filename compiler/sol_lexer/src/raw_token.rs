//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived scanner output before
//! interning, literal cooking and position tracking.

use logos::Logos;

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
// Horizontal whitespace, byte order mark and zero-width characters
#[logos(skip r"[ \t\r\u{FEFF}\u{200B}-\u{200D}\u{2060}]+")]
pub(crate) enum RawToken {
    /// Both `// …` and `//! …`; the cooking layer tells them apart.
    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"(\r?\n|;)+")]
    Newline,

    #[token("using")]
    Using,
    #[token("inductive")]
    Inductive,
    #[token("public")]
    Public,
    #[token("sealed")]
    Sealed,
    #[token("private")]
    Private,
    #[token("internal")]
    Internal,
    #[token("if")]
    If,
    #[token("then")]
    Then,
    #[token("else")]
    Else,
    #[token("match")]
    Match,
    #[token("return")]
    Return,
    #[token("is")]
    Is,
    #[token("let")]
    Let,
    #[token("U", priority = 3)]
    Universe,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token("@")]
    At,
    #[token("#")]
    Hash,
    #[token("^")]
    Caret,
    #[token("'")]
    Quote,

    // Reserved operator spellings. Exact tokens outrank the operator regex
    // at equal length; longer runs such as `==` or `->>` stay operators.
    // Single characters carry an explicit priority over `Operator` and
    // `Ident`.
    #[token("->")]
    Arrow,
    #[token("=>")]
    FatArrow,
    #[token("=", priority = 3)]
    Eq,
    #[token("|", priority = 3)]
    Pipe,
    #[token(".", priority = 3)]
    Dot,
    #[token("..")]
    DotDot,

    #[regex(r"[$?.+\-*/%&|!~=<>]+")]
    Operator,

    #[regex(r"`[$?.+\-*/%&|!~=<>]+")]
    Symbol,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_'$]*")]
    Ident,

    // Numbers swallow any identifier tail as their suffix; cooking rejects
    // the ones that are not a `NumericSuffix`. Radix prefixes outrank the
    // decimal form, which would otherwise read `0xff` as `0` with suffix `xff`.
    #[regex(r"0x[0-9a-fA-F][a-zA-Z0-9_]*", priority = 5)]
    HexInt,

    #[regex(r"0o[0-7][a-zA-Z0-9_]*", priority = 5)]
    OctInt,

    #[regex(r"0b[01][a-zA-Z0-9_]*", priority = 5)]
    BinInt,

    #[regex(r"[0-9][0-9_]*([a-zA-Z_][a-zA-Z0-9_]*)?")]
    Int,

    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9]+)?([a-zA-Z_][a-zA-Z0-9_]*)?")]
    Float,

    // String literal (no unescaped newlines allowed)
    #[regex(r#""([^"\\\n\r]|\\.)*""#)]
    String,

    // Same prefix without the closing quote; only wins when the line ends first.
    #[regex(r#""([^"\\\n\r]|\\.)*"#)]
    UnterminatedString,

    #[regex(r"'([^'\\\n\r]|\\u\{[0-9a-fA-F]*\}|\\.)'")]
    Char,

    #[regex(r"'\\[^\n]?")]
    UnterminatedChar,
}
