//! `if`, `match`, `return` and blocks.

use sol_diagnostic::ErrorCode;
use sol_ir::ast::{Block, ExprKind, IfPosition, MatchArm, Stmt};
use sol_ir::{ExprId, TokenTag};

use crate::recovery::{TokenSet, EXPR_START};
use crate::{ParseContext, ParseError, Parser};

impl Parser<'_> {
    /// `if c then a else b`. As a statement that is not the last in its
    /// block the `else` may be left out.
    pub(crate) fn parse_if(&mut self, position: IfPosition) -> Result<ExprId, ParseError> {
        let start = self.advance().span;
        let cond = self.in_context(ParseContext::NO_BLOCK_CALL, Self::parse_lambda)?;
        self.skip_newlines();
        self.expect(TokenTag::Then)?;
        self.skip_newlines();
        let then_branch = self.parse_branch()?;

        let else_branch = if self.cursor.peek_past_newlines() == TokenTag::Else {
            self.skip_newlines();
            self.advance();
            self.skip_newlines();
            Some(self.parse_branch()?)
        } else {
            if position == IfPosition::Expr {
                self.cursor.note_expected(TokenSet::single(TokenTag::Else));
                return Err(self.error_here(
                    ErrorCode::E1006,
                    "`if` used as a value needs an `else` branch",
                ));
            }
            None
        };

        let span = self.span_from(start);
        Ok(self.alloc_expr(
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
                position,
            },
            span,
        ))
    }

    /// A branch of `if` or `match`: a block or an expression.
    fn parse_branch(&mut self) -> Result<ExprId, ParseError> {
        if self.at(TokenTag::LBrace) {
            let block = self.parse_block()?;
            let span = block.span;
            return Ok(self.alloc_expr(ExprKind::Block(block), span));
        }
        self.parse_lambda()
    }

    /// `match e { pat => body, … }`; arms end at a comma or line break.
    pub(crate) fn parse_match(&mut self) -> Result<ExprId, ParseError> {
        let start = self.advance().span;
        let scrutinee = self.in_context(ParseContext::NO_BLOCK_CALL, Self::parse_lambda)?;
        let open = self.expect(TokenTag::LBrace)?.span;

        let arms = self.in_context(ParseContext::NONE, |p| {
            p.skip_newlines();
            let mut arms = Vec::new();
            while !p.check(TokenTag::RBrace) {
                arms.push(p.parse_match_arm().map_err(|e| e.in_context("a match arm"))?);
                if !p.cursor.eat_separators() {
                    break;
                }
            }
            Ok::<_, ParseError>(arms)
        })?;
        self.expect_closing(TokenTag::RBrace, open)?;

        let span = self.span_from(start);
        Ok(self.alloc_expr(ExprKind::Match { scrutinee, arms }, span))
    }

    fn parse_match_arm(&mut self) -> Result<MatchArm, ParseError> {
        let pattern = self.parse_pattern()?;
        self.expect(TokenTag::FatArrow)?;
        self.skip_newlines();
        let body = self.parse_branch()?;
        let span = self.pattern_span(pattern).merge(self.expr_span(body));
        Ok(MatchArm {
            pattern,
            body,
            span,
        })
    }

    /// `return` with an optional value.
    pub(crate) fn parse_return(&mut self) -> Result<ExprId, ParseError> {
        let start = self.advance().span;
        let value = if self.check_set(EXPR_START) {
            Some(self.parse_lambda()?)
        } else {
            None
        };
        let span = self.span_from(start);
        Ok(self.alloc_expr(ExprKind::Return(value), span))
    }

    /// `{ stmt* }`, statements separated by line breaks.
    pub fn parse_block(&mut self) -> Result<Block, ParseError> {
        let open = self.expect(TokenTag::LBrace)?.span;
        let stmts = self.in_context(ParseContext::NONE, |p| {
            p.skip_newlines();
            let mut stmts = Vec::new();
            while !p.check(TokenTag::RBrace) {
                stmts.push(p.parse_stmt()?);
                if !p.check(TokenTag::Newline) {
                    break;
                }
                p.skip_newlines();
            }
            if let Some(&Stmt::Expr(last)) = stmts.last() {
                p.reject_open_if(last)?;
            }
            Ok::<_, ParseError>(stmts)
        })?;
        let close = self.expect_closing(TokenTag::RBrace, open)?;
        Ok(Block {
            stmts,
            span: open.merge(close),
        })
    }

    /// The last statement of a block is its value, so an `if` there needs
    /// an `else`.
    fn reject_open_if(&mut self, last: ExprId) -> Result<(), ParseError> {
        if let ExprKind::If {
            else_branch: None,
            position: IfPosition::Stmt,
            ..
        } = self.arena.get_expr(last).kind
        {
            self.cursor.note_expected(TokenSet::single(TokenTag::Else));
            return Err(self.error_here(
                ErrorCode::E1006,
                "an `if` ending a block needs an `else` branch",
            ));
        }
        Ok(())
    }

    fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        if self.at(TokenTag::Let) {
            return self
                .parse_let()
                .map_err(|e| e.in_context("a `let` statement"));
        }
        if self.at(TokenTag::If) {
            return Ok(Stmt::Expr(self.parse_if(IfPosition::Stmt)?));
        }
        Ok(Stmt::Expr(self.parse_lambda()?))
    }

    /// `let pat (: T)? = e`
    fn parse_let(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        let pattern = self.parse_pattern()?;
        let ty = if self.check(TokenTag::Colon) {
            self.advance();
            Some(self.parse_type_expr()?)
        } else {
            None
        };
        self.expect(TokenTag::Eq)?;
        let value = self.parse_expr()?;
        Ok(Stmt::Let {
            pattern,
            ty,
            value,
            span: self.span_from(start),
        })
    }
}
