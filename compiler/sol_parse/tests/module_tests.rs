//! Whole-file parses of `fixtures/nat.sol`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use sol_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use sol_diagnostic::ErrorCode;
use sol_ir::ast::{Decl, DeclKind};
use sol_ir::{Position, StringInterner};
use sol_parse::{parse_source, ParseOptions};

const NAT: &str = include_str!("fixtures/nat.sol");

/// `kind name` for each declaration.
fn summary(decls: &[Decl], interner: &StringInterner) -> Vec<String> {
    decls
        .iter()
        .map(|decl| {
            let kind = match decl.kind {
                DeclKind::Command { .. } => "command",
                DeclKind::Using { .. } => "using",
                DeclKind::Inductive { .. } => "inductive",
                DeclKind::Signature { .. } => "signature",
                DeclKind::Clause { .. } => "clause",
            };
            let name = match &decl.kind {
                DeclKind::Using { path } => path,
                _ => decl.name().expect("named declaration"),
            };
            let name: Vec<_> = name
                .segments()
                .iter()
                .map(|s| interner.lookup(s.name))
                .collect();
            format!("{kind} {}", name.join("."))
        })
        .collect()
}

#[test]
fn fixture_parses_strictly() {
    let interner = StringInterner::new();
    let output = parse_source(NAT, &interner, ParseOptions::strict()).unwrap();

    assert_eq!(
        interner.lookup(output.module.hash_bang.unwrap()),
        "/usr/bin/env sol"
    );
    assert_eq!(
        summary(&output.module.decls, &interner),
        [
            "using Prelude",
            "inductive Nat",
            "inductive Maybe",
            "signature add",
            "clause add",
            "clause add",
            "signature Succ",
            "clause Succ",
            "signature map",
            "clause map",
            "clause map",
            "signature fromMaybe",
            "signature main",
            "command eval",
            "command check",
        ]
    );
}

#[test]
fn docs_and_attributes_reach_their_declarations() {
    let interner = StringInterner::new();
    let output = parse_source(NAT, &interner, ParseOptions::strict()).unwrap();
    let decls = &output.module.decls;

    assert_eq!(decls[0].attrs.docs.len(), 1);
    assert_eq!(
        interner.lookup(decls[1].attrs.docs[0]),
        "Natural numbers."
    );
    assert_eq!(decls[3].attrs.attributes.len(), 1);
    assert!(decls[3].visibility.is_some());
    assert!(decls[4].attrs.is_empty());
}

#[test]
fn lenient_parse_of_a_clean_file_matches_strict() {
    let interner = StringInterner::new();
    let strict = parse_source(NAT, &interner, ParseOptions::strict()).unwrap();
    let lenient = parse_source(NAT, &interner, ParseOptions::lenient()).unwrap();
    assert!(!lenient.has_errors());
    assert_eq!(strict, lenient);
}

#[test]
fn one_broken_clause_costs_one_declaration() {
    let broken = NAT.replace("add zero m = m", "add zero m = )");
    let interner = StringInterner::new();
    let output = parse_source(&broken, &interner, ParseOptions::lenient()).unwrap();

    assert_eq!(output.errors.len(), 1);
    let error = &output.errors[0];
    assert_eq!(error.code, ErrorCode::E1002);
    assert_eq!(error.position, Position::new(18, 14));
    assert_eq!(output.module.decls.len(), 14);

    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source("nat.sol", broken.as_str());
    emitter.emit(&error.to_diagnostic());
    emitter.flush();
    let rendered = String::from_utf8(emitter.into_inner()).unwrap();
    assert!(rendered.contains("nat.sol:18:14"), "{rendered}");
    assert!(rendered.contains("18 | add zero m = )"), "{rendered}");
}
