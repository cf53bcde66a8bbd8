//! Declarations and the module loop.

use sol_diagnostic::ErrorCode;
use sol_ir::ast::{Constructor, ConstructorKind, Decl, DeclKind, Module, ParamSet, Visibility};
use sol_ir::{ExprId, TokenKind, TokenTag};
use tracing::{debug, trace};

use crate::recovery::{TokenSet, DECL_START};
use crate::{ParseError, Parser};

/// What may follow an implicit `{ … }` list after a declared name; any
/// other `{ … }` there is a body.
const AFTER_IMPLICIT: [TokenTag; 4] = [
    TokenTag::LParen,
    TokenTag::LBracket,
    TokenTag::LBrace,
    TokenTag::Colon,
];

impl Parser<'_> {
    /// Parse every declaration up to `Eof`.
    ///
    /// Errors go to the parser's error list. In strict mode the loop stops
    /// at the first one; in lenient mode it resynchronizes and continues.
    pub fn parse_module(&mut self) -> Module {
        let mut module = Module::default();
        if let TokenKind::HashBang(text) = self.current_kind() {
            self.advance();
            module.hash_bang = Some(text);
        }

        loop {
            self.skip_newlines();
            if self.is_at_end() {
                break;
            }
            let decl_start = self.cursor.position();

            match self.parse_decl_line() {
                Ok(decl) => module.decls.push(decl),
                Err(error) => {
                    debug!(code = %error.code, at = %error.position, "syntax error");
                    if !self.record_error(error) {
                        break;
                    }
                    self.recover(decl_start);
                }
            }
        }
        module
    }

    /// A declaration that must end the line.
    fn parse_decl_line(&mut self) -> Result<Decl, ParseError> {
        let decl = self.parse_decl()?;
        if self.check(TokenTag::Newline) || self.check(TokenTag::Eof) {
            return Ok(decl);
        }
        let found = self.current_kind().display_name();
        Err(self.error_here(
            ErrorCode::E1001,
            format!("expected a line break after the declaration, found {found}"),
        ))
    }

    /// One declaration with its doc-strings, attributes and visibility.
    pub fn parse_decl(&mut self) -> Result<Decl, ParseError> {
        let start = self.current_span();
        let attrs = self.parse_attributes()?;
        if !attrs.is_empty() && self.is_at_end() {
            return Err(self.error_here(
                ErrorCode::E1008,
                "doc-strings and attributes must be followed by a declaration",
            ));
        }
        let visibility = self.parse_visibility();

        let kind = match self.current_tag() {
            TokenTag::Using => self.parse_using()?,
            TokenTag::Hash => self.parse_command()?,
            TokenTag::Inductive => self
                .parse_inductive()
                .map_err(|e| e.in_context("an inductive type"))?,
            TokenTag::Ident | TokenTag::Symbol => {
                let is_clause = self
                    .cursor
                    .scan_line_for(TokenTag::Eq, TokenSet::single(TokenTag::LBrace));
                trace!(is_clause, "signature or clause");
                if is_clause {
                    self.parse_clause()?
                } else {
                    self.parse_signature()?
                }
            }
            other => {
                self.cursor.note_expected(DECL_START);
                return Err(self.error_here(
                    ErrorCode::E1009,
                    format!("expected declaration, found {}", other.name()),
                ));
            }
        };

        Ok(Decl {
            attrs,
            visibility,
            kind,
            span: self.span_from(start),
        })
    }

    fn parse_visibility(&mut self) -> Option<Visibility> {
        let visibility = match self.current_kind() {
            TokenKind::Public => Visibility::Public,
            TokenKind::Sealed => Visibility::Sealed,
            TokenKind::Private => Visibility::Private,
            TokenKind::Internal => Visibility::Internal,
            _ => return None,
        };
        self.advance();
        Some(visibility)
    }

    /// `using path`
    fn parse_using(&mut self) -> Result<DeclKind, ParseError> {
        self.advance();
        let path = self.parse_path()?;
        Ok(DeclKind::Using { path })
    }

    /// `# path args…`, arguments comma-separated up to the line break.
    fn parse_command(&mut self) -> Result<DeclKind, ParseError> {
        self.advance();
        let name = self.parse_path()?;
        let mut args = Vec::new();
        if !self.at(TokenTag::Newline) && !self.is_at_end() {
            loop {
                args.push(self.parse_expr()?);
                if !self.check(TokenTag::Comma) {
                    break;
                }
                self.advance();
            }
        }
        Ok(DeclKind::Command { name, args })
    }

    /// `inductive path params* (: T)? { constructors }`
    fn parse_inductive(&mut self) -> Result<DeclKind, ParseError> {
        self.advance();
        let name = self.parse_path()?;
        let params = self.parse_decl_params()?;
        let ty = self.parse_type_annotation()?;

        let open = self.expect(TokenTag::LBrace)?.span;
        self.skip_newlines();
        let mut constructors = Vec::new();
        while !self.check(TokenTag::RBrace) {
            constructors.push(
                self.parse_constructor()
                    .map_err(|e| e.in_context("a constructor"))?,
            );
            if !self.cursor.eat_separators() {
                break;
            }
        }
        self.expect_closing(TokenTag::RBrace, open)?;

        Ok(DeclKind::Inductive {
            name,
            params,
            ty,
            constructors,
        })
    }

    /// `Name : T`, `Name(T, …)` or a bare `Name`.
    fn parse_constructor(&mut self) -> Result<Constructor, ParseError> {
        let start = self.current_span();
        let attrs = self.parse_attributes()?;
        let name = self.expect_identifier()?;

        let kind = if self.check(TokenTag::Colon) {
            self.advance();
            ConstructorKind::Signature {
                ty: self.parse_type_expr()?,
            }
        } else if self.check(TokenTag::LParen) {
            let open = self.advance().span;
            let (fields, _) = self.parse_comma_list(TokenTag::RParen, Self::parse_type_expr)?;
            self.expect_closing(TokenTag::RParen, open)?;
            ConstructorKind::Function { fields }
        } else {
            ConstructorKind::Function { fields: Vec::new() }
        };

        Ok(Constructor {
            attrs,
            name,
            kind,
            span: self.span_from(start),
        })
    }

    /// `path params* (: T)? block?`
    fn parse_signature(&mut self) -> Result<DeclKind, ParseError> {
        let name = self.parse_path()?;
        let params = self.parse_decl_params()?;
        let ty = self.parse_type_annotation()?;
        let body = if self.check(TokenTag::LBrace) {
            Some(self.parse_block()?)
        } else {
            None
        };
        Ok(DeclKind::Signature {
            name,
            params,
            ty,
            body,
        })
    }

    /// `path atom* = expr?`
    fn parse_clause(&mut self) -> Result<DeclKind, ParseError> {
        let name = self.parse_path()?;
        let mut patterns = Vec::new();
        while !self.check(TokenTag::Eq) {
            patterns.push(self.parse_pattern_atom()?);
        }
        self.advance();

        let value = if self.at(TokenTag::Newline) || self.is_at_end() {
            None
        } else {
            Some(
                self.parse_expr()
                    .map_err(|e| e.in_context("the right-hand side of a clause"))?,
            )
        };
        Ok(DeclKind::Clause {
            name,
            patterns,
            value,
        })
    }

    /// `( … )`, `[ … ]` and `{ … }` lists after a declared name.
    fn parse_decl_params(&mut self) -> Result<Vec<ParamSet>, ParseError> {
        let mut params = Vec::new();
        loop {
            let implicit = self.at(TokenTag::LBrace)
                && AFTER_IMPLICIT
                    .iter()
                    .any(|&tag| self.cursor.group_followed_by(tag));
            if !self.check(TokenTag::LParen) && !self.check(TokenTag::LBracket) && !implicit {
                break;
            }
            params.push(self.parse_param_set()?);
        }
        Ok(params)
    }

    /// `: T`, if present.
    fn parse_type_annotation(&mut self) -> Result<Option<ExprId>, ParseError> {
        if !self.check(TokenTag::Colon) {
            return Ok(None);
        }
        self.advance();
        Ok(Some(self.parse_type_expr()?))
    }
}
