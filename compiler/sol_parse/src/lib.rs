//! Recursive descent parser for sol.
//!
//! Produces a [`Module`] of declarations whose expressions and patterns
//! live in an [`ExprArena`]. Every choice between alternatives is made with
//! bounded lookahead (one balanced bracket group or one declaration line),
//! so the parser never backtracks across declarations.
//!
//! Errors carry the set of tokens accepted at the failure point. In
//! [`RecoveryMode::Strict`] the first one aborts the parse; in
//! [`RecoveryMode::Lenient`] the parser skips to the next line break at
//! bracket depth zero and keeps going.

mod context;
mod cursor;
mod error;
mod grammar;
mod recovery;
pub mod tracing_setup;

pub use context::ParseContext;
pub use cursor::Cursor;
pub use error::ParseError;
pub use recovery::{resync_point, TokenSet};

use sol_diagnostic::{Diagnostic, ErrorCode};
use sol_ir::ast::{Expr, ExprKind, Identifier, Module, Pattern, PatternKind};
use sol_ir::{
    ExprArena, ExprId, PatternId, Span, StringInterner, Token, TokenKind, TokenList, TokenTag,
};
use sol_lexer::LexError;
use tracing::{debug, trace};

/// What to do after a syntax error.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RecoveryMode {
    /// Stop at the first error.
    #[default]
    Strict,
    /// Record the error, skip the rest of the declaration, continue.
    Lenient,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    pub recovery: RecoveryMode,
}

impl ParseOptions {
    pub fn strict() -> Self {
        ParseOptions {
            recovery: RecoveryMode::Strict,
        }
    }

    pub fn lenient() -> Self {
        ParseOptions {
            recovery: RecoveryMode::Lenient,
        }
    }
}

/// A parsed module and the arena its nodes live in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOutput {
    pub module: Module,
    pub arena: ExprArena,
    /// Errors skipped over in lenient mode; always empty in strict mode.
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Failure of [`parse_source`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SourceError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SourceError::Lex(err) => err.code(),
            SourceError::Parse(err) => err.code,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            SourceError::Lex(err) => err.span,
            SourceError::Parse(err) => err.span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            SourceError::Lex(err) => err.to_diagnostic(),
            SourceError::Parse(err) => err.to_diagnostic(),
        }
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
    context: ParseContext,
    options: ParseOptions,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner, options: ParseOptions) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            arena: ExprArena::new(),
            context: ParseContext::NONE,
            options,
            errors: Vec::new(),
        }
    }

    /// The arena built so far.
    pub fn arena(&self) -> &ExprArena {
        &self.arena
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Take the arena and the recorded errors.
    pub fn finish(self) -> (ExprArena, Vec<ParseError>) {
        (self.arena, self.errors)
    }

    // Cursor delegation

    #[inline]
    fn current(&self) -> &Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_tag(&self) -> TokenTag {
        self.cursor.current_tag()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn at(&self, tag: TokenTag) -> bool {
        self.cursor.at(tag)
    }

    #[inline]
    fn check(&self, tag: TokenTag) -> bool {
        self.cursor.check(tag)
    }

    #[inline]
    fn check_set(&self, set: TokenSet) -> bool {
        self.cursor.check_set(set)
    }

    #[inline]
    fn advance(&mut self) -> Token {
        self.cursor.advance()
    }

    #[inline]
    fn expect(&mut self, tag: TokenTag) -> Result<Token, ParseError> {
        self.cursor.expect(tag)
    }

    #[inline]
    fn expect_identifier(&mut self) -> Result<Identifier, ParseError> {
        self.cursor.expect_identifier()
    }

    #[inline]
    fn skip_newlines(&mut self) {
        self.cursor.skip_newlines();
    }

    #[inline]
    fn interner(&self) -> &'a StringInterner {
        self.cursor.interner()
    }

    #[cold]
    fn error_here(&self, code: ErrorCode, message: impl Into<String>) -> ParseError {
        self.cursor.error_here(code, message)
    }

    /// Consume the closing delimiter `close` of a group opened at `open`.
    fn expect_closing(&mut self, close: TokenTag, open: Span) -> Result<Span, ParseError> {
        if self.check(close) {
            return Ok(self.advance().span);
        }
        let found = self.current_kind().display_name();
        Err(self
            .error_here(
                ErrorCode::E1003,
                format!("expected {} to close the group, found {found}", close.name()),
            )
            .with_opened(open))
    }

    // Context

    /// Run `f` with `context` in place of the current context.
    fn in_context<T>(&mut self, context: ParseContext, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = std::mem::replace(&mut self.context, context);
        let result = f(self);
        self.context = saved;
        result
    }

    /// Run `f` with `flag` added to the current context.
    fn with_context<T>(&mut self, flag: ParseContext, f: impl FnOnce(&mut Self) -> T) -> T {
        let context = self.context.with(flag);
        self.in_context(context, f)
    }

    /// Run `f` inside a bracket group: mode kept, position rules dropped.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let context = self.context.nested();
        self.in_context(context, f)
    }

    // Arena

    fn alloc_expr(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc_expr(Expr { kind, span })
    }

    fn alloc_pattern(&mut self, kind: PatternKind, span: Span) -> PatternId {
        self.arena.alloc_pattern(Pattern { kind, span })
    }

    fn expr_span(&self, id: ExprId) -> Span {
        self.arena.get_expr(id).span
    }

    fn pattern_span(&self, id: PatternId) -> Span {
        self.arena.get_pattern(id).span
    }

    /// Span from `start` to the end of the last consumed token.
    fn span_from(&self, start: Span) -> Span {
        start.merge(self.previous_span())
    }

    // Errors

    /// Record `error`; `true` if parsing should continue.
    fn record_error(&mut self, error: ParseError) -> bool {
        self.errors.push(error);
        self.options.recovery == RecoveryMode::Lenient
    }

    /// Skip to where the next declaration can start.
    fn recover(&mut self, decl_start: usize) {
        let error_index = self.cursor.position();
        let resume = resync_point(self.cursor.tags(), decl_start, error_index);
        trace!(
            from = error_index,
            to = resume,
            skipped = resume.saturating_sub(error_index),
            "skipping to next declaration"
        );
        self.cursor.set_position(resume);
    }
}

/// Parse a token list into a module.
///
/// In strict mode the first syntax error is returned as `Err`. In lenient
/// mode errors are collected in [`ParseOutput::errors`].
pub fn parse(
    tokens: &TokenList,
    interner: &StringInterner,
    options: ParseOptions,
) -> Result<ParseOutput, ParseError> {
    let mut parser = Parser::new(tokens, interner, options);
    let module = parser.parse_module();
    let (arena, mut errors) = parser.finish();
    debug!(
        tokens = tokens.len(),
        decls = module.decls.len(),
        exprs = arena.expr_count(),
        errors = errors.len(),
        "parsed module"
    );

    if options.recovery == RecoveryMode::Strict && !errors.is_empty() {
        return Err(errors.swap_remove(0));
    }
    Ok(ParseOutput {
        module,
        arena,
        errors,
    })
}

/// Lex and parse `source`.
pub fn parse_source(
    source: &str,
    interner: &StringInterner,
    options: ParseOptions,
) -> Result<ParseOutput, SourceError> {
    let tokens = sol_lexer::lex(source, interner)?;
    Ok(parse(&tokens, interner, options)?)
}

#[cfg(test)]
mod tests;
