//! Primary expressions: literals, paths, groups, tuples, arrays.

use sol_diagnostic::ErrorCode;
use sol_ir::ast::{ExprKind, IfPosition, Path};
use sol_ir::{ExprId, TokenKind, TokenTag};

use crate::grammar::literal_of;
use crate::recovery::{IDENT_START, PRIMARY_START};
use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let token = *self.current();
        if let Some(literal) = literal_of(token.kind) {
            self.advance();
            return Ok(self.alloc_expr(ExprKind::Literal(literal), token.span));
        }

        match token.kind {
            TokenKind::Ident(_) | TokenKind::Symbol(_) => {
                let path = self.parse_path()?;
                let span = path.span;
                Ok(self.alloc_expr(ExprKind::Path(path), span))
            }
            TokenKind::Caret => {
                self.advance();
                let name = self.expect_identifier()?;
                Ok(self.alloc_expr(ExprKind::FreeVar(name), token.span.merge(name.span)))
            }
            TokenKind::Universe => {
                self.advance();
                Ok(self.alloc_expr(ExprKind::Universe, token.span))
            }
            TokenKind::LParen => self.parse_paren(),
            TokenKind::LBracket => self.parse_array(),
            TokenKind::If => self.parse_if(IfPosition::Expr),
            TokenKind::Match => self.parse_match(),
            TokenKind::Return => self.parse_return(),
            other => {
                self.cursor.note_expected(PRIMARY_START);
                Err(self.error_here(
                    ErrorCode::E1002,
                    format!("expected expression, found {}", other.display_name()),
                ))
            }
        }
    }

    /// `A.B.c`: segments joined by a `.` that touches both sides.
    pub(crate) fn parse_path(&mut self) -> Result<Path, ParseError> {
        let first = self.expect_identifier()?;
        let mut path = Path::single(first);
        while self.at(TokenTag::Dot)
            && IDENT_START.contains(self.cursor.peek_tag(1))
            && self.cursor.spans_adjacent(self.previous_span(), self.current_span())
            && self.cursor.spans_adjacent(self.current_span(), self.cursor.peek_next_span())
        {
            self.advance();
            path.push(self.expect_identifier()?);
        }
        Ok(path)
    }

    /// `()`, `(e)`, `(e,)`, `(a, b, …)`.
    fn parse_paren(&mut self) -> Result<ExprId, ParseError> {
        let open = self.advance().span;
        let (items, trailing_comma) = self.nested(|p| {
            p.parse_comma_list(TokenTag::RParen, |p| p.parse_lambda())
        })?;
        let close = self.expect_closing(TokenTag::RParen, open)?;
        let span = open.merge(close);

        let kind = match items.as_slice() {
            [single] if !trailing_comma => ExprKind::Group(*single),
            _ => ExprKind::Tuple {
                items,
                trailing_comma,
            },
        };
        Ok(self.alloc_expr(kind, span))
    }

    fn parse_array(&mut self) -> Result<ExprId, ParseError> {
        let open = self.advance().span;
        let (items, _) = self.nested(|p| {
            p.parse_comma_list(TokenTag::RBracket, |p| p.parse_lambda())
        })?;
        let close = self.expect_closing(TokenTag::RBracket, open)?;
        Ok(self.alloc_expr(ExprKind::Array(items), open.merge(close)))
    }

    /// Comma-separated items up to (not including) `close`. Line breaks are
    /// allowed around items. Returns the items and whether a comma came
    /// last.
    pub(crate) fn parse_comma_list<T>(
        &mut self,
        close: TokenTag,
        mut item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<(Vec<T>, bool), ParseError> {
        let mut items = Vec::new();
        let mut trailing_comma = false;
        self.skip_newlines();
        while !self.check(close) {
            items.push(item(self)?);
            self.skip_newlines();
            if self.check(TokenTag::Comma) {
                self.advance();
                self.skip_newlines();
                trailing_comma = true;
            } else {
                trailing_comma = false;
                break;
            }
        }
        Ok((items, trailing_comma))
    }
}
