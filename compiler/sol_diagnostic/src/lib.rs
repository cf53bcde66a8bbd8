//! Diagnostics for the sol front-end.
//!
//! Lexer and parser errors convert into [`Diagnostic`]s: an [`ErrorCode`],
//! a message, labeled spans and the expected/found token names. Rendering
//! to a terminal lives in [`emitter`]; offset to line/column conversion in
//! [`span_utils`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
