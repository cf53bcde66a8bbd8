//! Error codes for front-end diagnostics.

use std::fmt;

/// Format `E####`; the first digit is the phase.
/// - E0xxx: lexer
/// - E1xxx: parser
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unterminated character literal
    E0002,
    /// Invalid escape sequence
    E0003,
    /// Integer literal out of range
    E0004,
    /// Malformed number literal
    E0005,
    /// Character not valid in sol source
    E0006,
    /// Source file too large to address with 32-bit offsets
    E0007,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Expected pattern
    E1005,
    /// `if` used as a value without `else`
    E1006,
    /// Trailing block in type position
    E1007,
    /// Doc-string or attribute not followed by a declaration
    E1008,
    /// Expected declaration
    E1009,
}

impl ErrorCode {
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E0006,
        ErrorCode::E0007,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E1009,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E0007 => "E0007",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
        }
    }

    /// One-line summary of the error class.
    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "unterminated character literal",
            ErrorCode::E0003 => "invalid escape sequence",
            ErrorCode::E0004 => "integer literal out of range",
            ErrorCode::E0005 => "malformed number literal",
            ErrorCode::E0006 => "unexpected character",
            ErrorCode::E0007 => "source file too large",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "expected identifier",
            ErrorCode::E1005 => "expected pattern",
            ErrorCode::E1006 => "`if` expression without `else`",
            ErrorCode::E1007 => "trailing block in type position",
            ErrorCode::E1008 => "doc-string or attribute without a declaration",
            ErrorCode::E1009 => "expected declaration",
        }
    }

    pub const fn is_lexer_error(self) -> bool {
        self.as_str().as_bytes()[1] == b'0'
    }

    pub const fn is_parser_error(self) -> bool {
        self.as_str().as_bytes()[1] == b'1'
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
