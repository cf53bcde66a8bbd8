//! Parser tests.
//!
//! - `support`: shared helpers for parsing snippets and reading the arena
//! - `printer`: renders a parsed module back to source
//! - `parser`: end-to-end module tests, recovery and diagnostics
//! - `properties`: proptest properties over generated sources

pub(crate) mod support;

mod parser;
