//! Parse errors.

use sol_diagnostic::{Diagnostic, ErrorCode};
use sol_ir::{Position, Span};

use crate::recovery::TokenSet;

/// A syntax error at the furthest point the parser reached.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{position}: {message}")]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    /// Line and column of `span.start`.
    pub position: Position,
    /// Tokens that would have been accepted at `span`.
    pub expected: TokenSet,
    /// Display name of the token found at `span`.
    pub found: &'static str,
    /// What was being parsed, e.g. `"a match arm"`.
    pub context: Option<&'static str>,
    /// The opening delimiter, for unclosed-delimiter errors.
    pub opened: Option<Span>,
}

impl ParseError {
    #[cold]
    pub fn new(
        code: ErrorCode,
        message: impl Into<String>,
        span: Span,
        position: Position,
        found: &'static str,
    ) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            position,
            expected: TokenSet::new(),
            found,
            context: None,
            opened: None,
        }
    }

    #[must_use]
    pub fn with_expected(mut self, expected: TokenSet) -> Self {
        self.expected = expected;
        self
    }

    #[must_use]
    pub fn with_opened(mut self, opened: Span) -> Self {
        self.opened = Some(opened);
        self
    }

    /// Attach what was being parsed. The innermost context wins.
    #[must_use]
    pub fn in_context(mut self, context: &'static str) -> Self {
        if self.context.is_none() {
            self.context = Some(context);
        }
        self
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, format!("found {}", self.found))
            .with_expected(self.expected.names())
            .with_found(self.found);
        if let Some(opened) = self.opened {
            diag = diag.with_secondary_label(opened, "unclosed delimiter opened here");
        }
        if let Some(context) = self.context {
            diag = diag.with_note(format!("while parsing {context}"));
        }
        diag
    }
}
