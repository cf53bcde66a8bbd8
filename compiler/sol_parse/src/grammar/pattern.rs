//! Patterns.
//!
//! `parse_pattern` allows constructor arguments; `parse_pattern_atom`
//! does not, so a sequence of atoms stays a sequence (`f x y = …` has
//! two argument patterns, `Cons (Succ n) xs` has two sub-patterns).

use sol_diagnostic::ErrorCode;
use sol_ir::ast::PatternKind;
use sol_ir::{PatternId, TokenKind, TokenTag};
use sol_stack::ensure_sufficient_stack;

use crate::grammar::literal_of;
use crate::recovery::{IDENT_START, PATTERN_START};
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// A pattern: a path applied to atoms, or a single atom.
    pub fn parse_pattern(&mut self) -> Result<PatternId, ParseError> {
        ensure_sufficient_stack(|| {
            if !self.check_set(IDENT_START) {
                return self.parse_pattern_atom();
            }
            let path = self.parse_path()?;
            let start = path.span;
            let mut args = Vec::new();
            while self.check_set(PATTERN_START) {
                args.push(self.parse_pattern_atom()?);
            }
            let span = self.span_from(start);
            Ok(self.alloc_pattern(PatternKind::Constructor { path, args }, span))
        })
    }

    /// A literal, a bare path, `..` or a parenthesized pattern.
    pub fn parse_pattern_atom(&mut self) -> Result<PatternId, ParseError> {
        let token = *self.current();
        if let Some(literal) = literal_of(token.kind) {
            self.advance();
            return Ok(self.alloc_pattern(PatternKind::Literal(literal), token.span));
        }

        match token.kind {
            TokenKind::Ident(_) | TokenKind::Symbol(_) => {
                let path = self.parse_path()?;
                let span = path.span;
                Ok(self.alloc_pattern(
                    PatternKind::Constructor {
                        path,
                        args: Vec::new(),
                    },
                    span,
                ))
            }
            TokenKind::DotDot => {
                self.advance();
                Ok(self.alloc_pattern(PatternKind::Rest, token.span))
            }
            TokenKind::LParen => {
                let open = self.advance().span;
                self.skip_newlines();
                let inner = self.parse_pattern()?;
                self.skip_newlines();
                let close = self.expect_closing(TokenTag::RParen, open)?;
                Ok(self.alloc_pattern(PatternKind::Group(inner), open.merge(close)))
            }
            other => {
                self.cursor.note_expected(PATTERN_START);
                Err(self.error_here(
                    ErrorCode::E1005,
                    format!("expected pattern, found {}", other.display_name()),
                ))
            }
        }
    }
}
