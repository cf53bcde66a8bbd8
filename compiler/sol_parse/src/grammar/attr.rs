//! Doc-strings and attributes written before a declaration or constructor.

use sol_ir::ast::{Attribute, Attributes};
use sol_ir::{TokenKind, TokenTag};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Collect `//!` doc-strings and `@path(args…)` attributes. Line breaks
    /// between them are skipped.
    pub(crate) fn parse_attributes(&mut self) -> Result<Attributes, ParseError> {
        let mut attrs = Attributes::default();
        loop {
            match self.current_kind() {
                TokenKind::DocString(text) => {
                    self.advance();
                    attrs.docs.push(text);
                }
                TokenKind::At => {
                    let attr = self
                        .parse_attribute()
                        .map_err(|e| e.in_context("an attribute"))?;
                    attrs.attributes.push(attr);
                }
                _ => break,
            }
            self.skip_newlines();
        }
        Ok(attrs)
    }

    fn parse_attribute(&mut self) -> Result<Attribute, ParseError> {
        let start = self.advance().span;
        let path = self.parse_path()?;
        let args = if self.check(TokenTag::LParen) {
            let open = self.advance().span;
            let (args, _) = self.parse_comma_list(TokenTag::RParen, Self::parse_expr)?;
            self.expect_closing(TokenTag::RParen, open)?;
            args
        } else {
            Vec::new()
        };
        Ok(Attribute {
            path,
            args,
            span: self.span_from(start),
        })
    }
}
