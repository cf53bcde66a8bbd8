//! Core data types of the sol front-end.
//!
//! - [`Span`] / [`Position`]: source locations
//! - [`Name`] / [`StringInterner`]: interned strings
//! - [`token`]: what the lexer produces
//! - [`ast`]: what the parser produces

pub mod ast;
mod interner;
mod name;
mod span;
pub mod token;

pub use ast::{ExprArena, ExprId, PatternId};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use span::{Position, Span, SpanError};
pub use token::{Token, TokenKind, TokenList, TokenTag};
