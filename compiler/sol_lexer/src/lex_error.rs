//! Lexer errors.
//!
//! Any lexer error is fatal to the file being lexed.

use sol_diagnostic::{Diagnostic, ErrorCode};
use sol_ir::{Position, Span};

/// What went wrong.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated character literal")]
    UnterminatedChar,
    #[error("invalid escape sequence `{escape}`")]
    InvalidEscape { escape: String },
    #[error("integer literal `{text}` does not fit in 128 bits")]
    IntOverflow { text: String },
    #[error("malformed number literal `{text}`")]
    InvalidNumber { text: String },
    #[error("unexpected character `{found}`")]
    UnexpectedChar { found: char },
    #[error("source is {len} bytes, more than a 32-bit offset can address")]
    SourceTooLarge { len: usize },
}

impl LexErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnterminatedChar => ErrorCode::E0002,
            LexErrorKind::InvalidEscape { .. } => ErrorCode::E0003,
            LexErrorKind::IntOverflow { .. } => ErrorCode::E0004,
            LexErrorKind::InvalidNumber { .. } => ErrorCode::E0005,
            LexErrorKind::UnexpectedChar { .. } => ErrorCode::E0006,
            LexErrorKind::SourceTooLarge { .. } => ErrorCode::E0007,
        }
    }
}

/// A lexer error: what went wrong and where.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{position}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    pub position: Position,
}

impl LexError {
    #[cold]
    pub fn new(kind: LexErrorKind, span: Span, position: Position) -> Self {
        LexError {
            kind,
            span,
            position,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match &self.kind {
            LexErrorKind::UnterminatedString => "missing closing `\"`",
            LexErrorKind::UnterminatedChar => "missing closing `'`",
            LexErrorKind::InvalidEscape { .. } => "invalid escape",
            LexErrorKind::IntOverflow { .. } => "out of range",
            LexErrorKind::InvalidNumber { .. } => "malformed literal",
            LexErrorKind::UnexpectedChar { .. } => "not valid here",
            LexErrorKind::SourceTooLarge { .. } => "file too large",
        };
        Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, label)
    }
}
