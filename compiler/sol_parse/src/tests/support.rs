#![allow(clippy::unwrap_used, clippy::expect_used)]

use sol_ir::ast::{Decl, DeclKind, Expr, ExprKind, Identifier, Path};
use sol_ir::{ExprId, StringInterner};

use crate::{parse_source, ParseError, ParseOptions, ParseOutput, SourceError};

/// Parse `source` strictly, panicking with the error if it fails.
pub(crate) fn parse_ok(source: &str) -> (ParseOutput, StringInterner) {
    let interner = StringInterner::new();
    let output = parse_source(source, &interner, ParseOptions::default())
        .unwrap_or_else(|err| panic!("{source:?} failed to parse: {err}"));
    (output, interner)
}

/// Parse `source` strictly and return the syntax error it must produce.
pub(crate) fn parse_err(source: &str) -> ParseError {
    let interner = StringInterner::new();
    match parse_source(source, &interner, ParseOptions::default()) {
        Err(SourceError::Parse(err)) => err,
        Err(SourceError::Lex(err)) => panic!("{source:?} failed to lex: {err}"),
        Ok(_) => panic!("{source:?} parsed without error"),
    }
}

pub(crate) fn expr(output: &ParseOutput, id: ExprId) -> &Expr {
    output.arena.get_expr(id)
}

/// Value of the clause at `index`.
pub(crate) fn clause_value(output: &ParseOutput, index: usize) -> ExprId {
    match &output.module.decls[index].kind {
        DeclKind::Clause { value, .. } => value.expect("clause has no value"),
        other => panic!("expected a clause, got {other:?}"),
    }
}

/// Type of the signature at `index`.
pub(crate) fn signature_type(output: &ParseOutput, index: usize) -> ExprId {
    match &output.module.decls[index].kind {
        DeclKind::Signature { ty, .. } => ty.expect("signature has no type"),
        other => panic!("expected a signature, got {other:?}"),
    }
}

pub(crate) fn ident_text(interner: &StringInterner, ident: Identifier) -> &'static str {
    interner.lookup(ident.name)
}

pub(crate) fn path_text(interner: &StringInterner, path: &Path) -> String {
    path.segments()
        .iter()
        .map(|segment| interner.lookup(segment.name))
        .collect::<Vec<_>>()
        .join(".")
}

/// Dotted name of a `Path` expression, `None` for anything else.
pub(crate) fn path_expr_text(
    output: &ParseOutput,
    interner: &StringInterner,
    id: ExprId,
) -> Option<String> {
    match &expr(output, id).kind {
        ExprKind::Path(path) => Some(path_text(interner, path)),
        _ => None,
    }
}

/// Look through any number of `Group` wrappers.
pub(crate) fn ungroup(output: &ParseOutput, mut id: ExprId) -> ExprId {
    while let ExprKind::Group(inner) = expr(output, id).kind {
        id = inner;
    }
    id
}

pub(crate) fn decl_name(interner: &StringInterner, decl: &Decl) -> String {
    decl.name()
        .map(|path| path_text(interner, path))
        .unwrap_or_default()
}
