//! Expression parsing.
//!
//! One grammar serves values and types. Levels, loosest first:
//!
//! 1. lambda `|pat+| body`
//! 2. Pi `params -> result`, right-associated
//! 3. Sigma `[params] => result`
//! 4. annotation `e is T`, left-associated
//! 5. binary chain `app (op app)*`, one precedence, left-associated
//! 6. application `primary primary* {block}?`
//! 7. primary (`primary.rs`)
//!
//! Binder lists (`binder.rs`) and control forms (`control.rs`) hang off
//! these levels.

mod binder;
mod control;
mod primary;

use sol_diagnostic::ErrorCode;
use sol_ir::ast::{ExprKind, Identifier, ParamKind, ParamSet, ParamSetKind, Parameter};
use sol_ir::{ExprId, TokenKind, TokenTag};
use sol_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::recovery::{ARG_START, BINARY_OP};
use crate::{ParseContext, ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression in value position.
    pub fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        self.in_context(ParseContext::NONE, Self::parse_lambda)
    }

    /// Parse an expression in type position.
    pub fn parse_type_expr(&mut self) -> Result<ExprId, ParseError> {
        self.in_context(ParseContext::IN_TYPE, Self::parse_pi)
    }

    /// Parse at the loosest level, keeping the current context.
    fn parse_lambda(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| {
            if !self.check(TokenTag::Pipe) {
                return self.parse_pi();
            }
            let start = self.advance().span;

            let mut params = Vec::new();
            while !self.check(TokenTag::Pipe) {
                params.push(self.parse_pattern_atom()?);
            }
            if params.is_empty() {
                return Err(self.error_here(
                    ErrorCode::E1005,
                    "expected a lambda parameter, found `|`",
                ));
            }
            self.advance();

            let body = self.parse_lambda()?;
            let span = start.merge(self.expr_span(body));
            Ok(self.alloc_expr(ExprKind::Lambda { params, body }, span))
        })
    }

    /// Pi level: an explicit or implicit binder list, or a domain, then
    /// `->` and a right-nested result.
    fn parse_pi(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| {
            let binders = if self.at(TokenTag::LBrace) && self.cursor.group_followed_by(TokenTag::Arrow)
            {
                trace!("implicit binder list");
                Some(self.parse_param_set()?)
            } else if self.at(TokenTag::LParen) && self.is_binder_list() {
                trace!("explicit binder list");
                Some(self.parse_param_set()?)
            } else {
                None
            };

            if let Some(params) = binders {
                self.expect(TokenTag::Arrow)?;
                return self.finish_pi(params);
            }

            let domain = self.parse_sigma()?;
            if !self.check(TokenTag::Arrow) {
                return Ok(domain);
            }
            self.advance();
            let domain = self.retag_domain(domain)?;
            let span = self.expr_span(domain);
            let params = ParamSet {
                kind: ParamSetKind::Domain,
                params: vec![Parameter {
                    kind: ParamKind::Typed {
                        binding: None,
                        ty: domain,
                    },
                    span,
                }],
                span,
            };
            self.finish_pi(params)
        })
    }

    /// The result of a Pi after its `->`.
    fn finish_pi(&mut self, params: ParamSet) -> Result<ExprId, ParseError> {
        let result = self.with_context(ParseContext::IN_TYPE, Self::parse_pi)?;
        let span = params.span.merge(self.expr_span(result));
        Ok(self.alloc_expr(ExprKind::Pi { params, result }, span))
    }

    /// A domain read in value position becomes a type: every `App` in it
    /// turns into `TypeApp`, and a trailing block anywhere is an error.
    ///
    /// The walk descends through operands, annotated values, groups, tuples
    /// and arrays. Binders and bodies keep their own positions.
    fn retag_domain(&mut self, domain: ExprId) -> Result<ExprId, ParseError> {
        let position = self.current().position;
        let mut pending = vec![domain];
        while let Some(id) = pending.pop() {
            let expr = self.arena.get_expr_mut(id);
            match &mut expr.kind {
                ExprKind::App {
                    callee,
                    args,
                    block,
                } => {
                    if let Some(block) = block {
                        return Err(ParseError::new(
                            ErrorCode::E1007,
                            "a trailing block cannot appear in a type",
                            block.span,
                            position,
                            TokenTag::LBrace.name(),
                        ));
                    }
                    let callee = *callee;
                    let args = std::mem::take(args);
                    pending.extend(args.iter().rev());
                    pending.push(callee);
                    expr.kind = ExprKind::TypeApp { callee, args };
                }
                ExprKind::Binary { lhs, rhs, .. } => {
                    pending.push(*rhs);
                    pending.push(*lhs);
                }
                ExprKind::Ann { value, .. } => pending.push(*value),
                ExprKind::Group(inner) => pending.push(*inner),
                ExprKind::Tuple { items, .. } | ExprKind::Array(items) => {
                    pending.extend(items.iter().rev());
                }
                _ => {}
            }
        }
        Ok(domain)
    }

    /// Sigma level: `[params] => result`, or fall through to annotation.
    fn parse_sigma(&mut self) -> Result<ExprId, ParseError> {
        if self.at(TokenTag::LBracket) && self.cursor.group_followed_by(TokenTag::FatArrow) {
            trace!("sigma binder list");
            let params = self.parse_param_set()?;
            self.expect(TokenTag::FatArrow)?;
            let result = self.with_context(ParseContext::IN_TYPE, Self::parse_pi)?;
            let span = params.span.merge(self.expr_span(result));
            return Ok(self.alloc_expr(ExprKind::Sigma { params, result }, span));
        }
        self.parse_annotation()
    }

    /// `e is T is U` = `(e is T) is U`.
    fn parse_annotation(&mut self) -> Result<ExprId, ParseError> {
        let mut value = self.parse_binary()?;
        if !self.context.allows_annotation() {
            return Ok(value);
        }
        while self.check(TokenTag::Is) {
            self.advance();
            let ty = self.in_context(
                ParseContext::IN_TYPE.with(ParseContext::NO_ANNOTATION),
                Self::parse_pi,
            )?;
            let span = self.expr_span(value).merge(self.expr_span(ty));
            value = self.alloc_expr(ExprKind::Ann { value, ty }, span);
        }
        Ok(value)
    }

    /// Flat left fold: `a $ b % c` = `(a $ b) % c`.
    fn parse_binary(&mut self) -> Result<ExprId, ParseError> {
        let mut lhs = self.parse_application()?;
        while let Some(op) = self.binary_operator() {
            self.advance();
            let rhs = self.parse_application()?;
            let span = self.expr_span(lhs).merge(self.expr_span(rhs));
            lhs = self.alloc_expr(ExprKind::Binary { lhs, op, rhs }, span);
        }
        Ok(lhs)
    }

    /// The operator at the current token, if it is in infix position.
    ///
    /// A `.` touching both neighbours belongs to a path, never an operator.
    fn binary_operator(&self) -> Option<Identifier> {
        let token = self.current();
        let name = match token.kind {
            TokenKind::Operator(name) => name,
            TokenKind::Pipe => self.interner().intern("|"),
            TokenKind::Dot => {
                let tight = self.cursor.spans_adjacent(self.previous_span(), token.span)
                    && self.cursor.spans_adjacent(token.span, self.cursor.peek_next_span());
                if tight {
                    return None;
                }
                self.interner().intern(".")
            }
            _ => {
                self.cursor.note_expected(BINARY_OP);
                return None;
            }
        };
        Some(Identifier::symbol(name, token.span))
    }

    /// A primary followed by greedy primary arguments and, in value
    /// position, an optional trailing block.
    fn parse_application(&mut self) -> Result<ExprId, ParseError> {
        let callee = self.parse_primary()?;
        if self.is_closed_form(callee) {
            return Ok(callee);
        }

        let mut args = Vec::new();
        while self.check_set(ARG_START) {
            args.push(self.parse_primary()?);
        }

        let block = if self.context.allows_block_call() && self.check(TokenTag::LBrace) {
            Some(self.parse_block()?)
        } else {
            None
        };

        if args.is_empty() && block.is_none() {
            return Ok(callee);
        }

        let start = self.expr_span(callee);
        let span = self.span_from(start);
        let kind = if self.context.in_type() {
            ExprKind::TypeApp { callee, args }
        } else {
            ExprKind::App {
                callee,
                args,
                block,
            }
        };
        Ok(self.alloc_expr(kind, span))
    }

    /// `if`, `match` and `return` extend to the right on their own and
    /// take no arguments.
    fn is_closed_form(&self, id: ExprId) -> bool {
        matches!(
            self.arena.get_expr(id).kind,
            ExprKind::If { .. } | ExprKind::Match { .. } | ExprKind::Return(_)
        )
    }
}
