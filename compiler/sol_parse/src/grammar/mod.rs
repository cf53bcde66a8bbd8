//! Grammar productions, grouped by area.
//!
//! Each submodule adds an `impl Parser` block:
//! - `expr`: expressions and type expressions
//! - `pattern`: match, clause and lambda patterns
//! - `attr`: doc-strings and `@` attributes
//! - `item`: declarations and the module loop

mod attr;
mod expr;
mod item;
mod pattern;

use sol_ir::ast::Literal;
use sol_ir::TokenKind;

/// The literal a token stands for, if it is one.
fn literal_of(kind: TokenKind) -> Option<Literal> {
    match kind {
        TokenKind::Int(value) => Some(Literal::Int(value)),
        TokenKind::Float(value) => Some(Literal::Float(value)),
        TokenKind::String(value) => Some(Literal::String(value)),
        TokenKind::Char(value) => Some(Literal::Char(value)),
        _ => None,
    }
}
