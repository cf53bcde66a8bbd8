//! Parameter sets: `( … )`, `{ … }` and Sigma `[ … ]`.

use sol_diagnostic::ErrorCode;
use sol_ir::ast::{ParamKind, ParamSet, ParamSetKind, Parameter};
use sol_ir::TokenTag;

use crate::recovery::TokenSet;
use crate::{ParseContext, ParseError, Parser};

const PARAM_SET_START: TokenSet = TokenSet::single(TokenTag::LParen)
    .with(TokenTag::LBrace)
    .with(TokenTag::LBracket);

impl Parser<'_> {
    /// A bracketed parameter list. Explicit and implicit lists take
    /// `'a`, `pat : T` or a bare type; Sigma lists take `'a`, `pat : T` or
    /// a bare pattern.
    pub fn parse_param_set(&mut self) -> Result<ParamSet, ParseError> {
        let (kind, close) = match self.current_tag() {
            TokenTag::LParen => (ParamSetKind::Explicit, TokenTag::RParen),
            TokenTag::LBrace => (ParamSetKind::Implicit, TokenTag::RBrace),
            TokenTag::LBracket => (ParamSetKind::Sigma, TokenTag::RBracket),
            other => {
                self.cursor.note_expected(PARAM_SET_START);
                return Err(self.error_here(
                    ErrorCode::E1001,
                    format!("expected a parameter list, found {}", other.name()),
                ));
            }
        };
        let open = self.advance().span;
        let (params, _) = self.in_context(ParseContext::NONE, |p| {
            p.parse_comma_list(close, |p| p.parse_parameter(kind))
        })?;
        let close = self.expect_closing(close, open)?;
        Ok(ParamSet {
            kind,
            params,
            span: open.merge(close),
        })
    }

    fn parse_parameter(&mut self, set: ParamSetKind) -> Result<Parameter, ParseError> {
        let start = self.current_span();

        if self.check(TokenTag::Quote) {
            self.advance();
            let name = self.expect_identifier()?;
            return Ok(Parameter {
                kind: ParamKind::Forall(name),
                span: start.merge(name.span),
            });
        }

        let kind = if self.param_has_annotation() {
            let binding = self.parse_pattern()?;
            self.expect(TokenTag::Colon)?;
            let ty = self.parse_type_expr()?;
            ParamKind::Typed {
                binding: Some(binding),
                ty,
            }
        } else if set == ParamSetKind::Sigma {
            ParamKind::Untyped(self.parse_pattern()?)
        } else {
            ParamKind::Typed {
                binding: None,
                ty: self.parse_type_expr()?,
            }
        };
        Ok(Parameter {
            kind,
            span: self.span_from(start),
        })
    }

    /// Whether the parameter at the cursor has a `:` before its `,` or the
    /// closing bracket.
    fn param_has_annotation(&self) -> bool {
        let start = self.cursor.position();
        let mut depth = 0usize;
        let mut index = start;
        loop {
            let tag = self.cursor.tag_at(index);
            match tag {
                TokenTag::Eof => return false,
                TokenTag::LParen | TokenTag::LBracket | TokenTag::LBrace => depth += 1,
                TokenTag::RParen | TokenTag::RBracket | TokenTag::RBrace => {
                    if depth == 0 {
                        return false;
                    }
                    depth -= 1;
                }
                TokenTag::Comma if depth == 0 => return false,
                TokenTag::Colon if depth == 0 => return true,
                _ => {}
            }
            index += 1;
        }
    }

    /// At `(`: the group is a binder list if it is followed by `->` and
    /// either starts with a forall quote or has a top-level `:`.
    pub(super) fn is_binder_list(&self) -> bool {
        let open = self.cursor.position();
        let Some(close) = self.cursor.matching_close(open) else {
            return false;
        };
        if self.cursor.tag_at(close + 1) != TokenTag::Arrow {
            return false;
        }
        self.cursor.tag_at(open + 1) == TokenTag::Quote
            || self
                .cursor
                .contains_at_depth_zero(open + 1, close, TokenTag::Colon)
    }
}
