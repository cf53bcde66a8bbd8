#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use sol_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use sol_diagnostic::ErrorCode;
use sol_ir::ast::{DeclKind, ExprKind, Literal, ParamSetKind, Visibility};
use sol_ir::token::NumericSuffix;
use sol_ir::{Position, Span, StringInterner, TokenTag};

use super::support::{
    clause_value, decl_name, expr, parse_err, parse_ok, path_expr_text, path_text,
    signature_type,
};
use crate::{parse_source, ParseOptions, RecoveryMode, SourceError};

fn parse_lenient(source: &str) -> (crate::ParseOutput, StringInterner) {
    let interner = StringInterner::new();
    let output = parse_source(source, &interner, ParseOptions::lenient())
        .unwrap_or_else(|err| panic!("{source:?} failed to lex: {err}"));
    (output, interner)
}

// Declaration shapes

#[test]
fn colon_line_is_a_signature() {
    let (output, interner) = parse_ok("Succ : Nat -> Nat");
    assert_eq!(output.module.decls.len(), 1);
    assert_eq!(decl_name(&interner, &output.module.decls[0]), "Succ");

    let ty = signature_type(&output, 0);
    let ExprKind::Pi { params, result } = &expr(&output, ty).kind else {
        panic!("expected a Pi type");
    };
    assert_eq!(params.kind, ParamSetKind::Domain);
    assert_eq!(
        path_expr_text(&output, &interner, *result).as_deref(),
        Some("Nat")
    );
}

#[test]
fn equals_line_is_a_clause_with_atom_patterns() {
    let (output, interner) = parse_ok("Succ prev n succ$ zero$ = succ$ (prev n succ$ zero$)");
    let DeclKind::Clause { name, patterns, value } = &output.module.decls[0].kind else {
        panic!("expected a clause");
    };
    assert_eq!(path_text(&interner, name), "Succ");
    assert_eq!(patterns.len(), 4);
    assert!(value.is_some());
}

#[test]
fn clauses_of_one_definition_stay_separate() {
    let (output, interner) = parse_ok("add zero m = m\nadd (succ n) m = succ (add n m)");
    let names: Vec<_> = output
        .module
        .decls
        .iter()
        .map(|decl| decl_name(&interner, decl))
        .collect();
    assert_eq!(names, ["add", "add"]);
    assert!(output
        .module
        .decls
        .iter()
        .all(|decl| matches!(decl.kind, DeclKind::Clause { .. })));
}

#[test]
fn integer_suffix_is_kept() {
    let (output, _) = parse_ok("a = 0u8\nb = 0");
    let suffix_of = |index| match expr(&output, clause_value(&output, index)).kind {
        ExprKind::Literal(Literal::Int(lit)) => lit.suffix,
        ref other => panic!("expected an integer literal, got {other:?}"),
    };
    assert_eq!(suffix_of(0), Some(NumericSuffix::U8));
    assert_eq!(suffix_of(1), None);
}

#[test]
fn empty_source_is_an_empty_module() {
    let (output, _) = parse_ok("");
    assert!(output.module.decls.is_empty());
    assert!(!output.has_errors());

    let (output, _) = parse_ok("\n\n;\n");
    assert!(output.module.decls.is_empty());
}

#[test]
fn hash_bang_is_recorded() {
    let (output, interner) = parse_ok("#!/usr/bin/env sol\nmain = 1");
    let hash_bang = output.module.hash_bang.expect("hash-bang");
    assert_eq!(interner.lookup(hash_bang), "/usr/bin/env sol");
    assert_eq!(output.module.decls.len(), 1);
}

#[test]
fn docs_attributes_and_visibility_attach_to_the_declaration() {
    let (output, interner) =
        parse_ok("//! Adds one.\n@inline\n@deprecated(\"use succ\")\npublic inc n = n + 1");
    let decl = &output.module.decls[0];
    assert_eq!(decl.visibility, Some(Visibility::Public));
    assert_eq!(decl.attrs.docs.len(), 1);
    assert_eq!(interner.lookup(decl.attrs.docs[0]), "Adds one.");

    let attrs: Vec<_> = decl
        .attrs
        .attributes
        .iter()
        .map(|attr| (path_text(&interner, &attr.path), attr.args.len()))
        .collect();
    assert_eq!(
        attrs,
        [("inline".to_owned(), 0), ("deprecated".to_owned(), 1)]
    );
    assert!(matches!(decl.kind, DeclKind::Clause { .. }));
}

#[test]
fn every_visibility_keyword() {
    let (output, _) = parse_ok("public a = 1\nsealed b = 1\nprivate c = 1\ninternal d = 1\ne = 1");
    let visibilities: Vec<_> = output.module.decls.iter().map(|d| d.visibility).collect();
    assert_eq!(
        visibilities,
        [
            Some(Visibility::Public),
            Some(Visibility::Sealed),
            Some(Visibility::Private),
            Some(Visibility::Internal),
            None,
        ]
    );
}

#[test]
fn using_takes_a_dotted_path() {
    let (output, interner) = parse_ok("using Data.Nat");
    let DeclKind::Using { path } = &output.module.decls[0].kind else {
        panic!("expected `using`");
    };
    assert_eq!(path_text(&interner, path), "Data.Nat");
    assert_eq!(output.module.decls[0].name(), None);
}

#[test]
fn commands_take_comma_separated_arguments() {
    let (output, interner) = parse_ok("#eval f 1, g 2\n#check");
    let DeclKind::Command { name, args } = &output.module.decls[0].kind else {
        panic!("expected a command");
    };
    assert_eq!(path_text(&interner, name), "eval");
    assert_eq!(args.len(), 2);
    assert!(matches!(expr(&output, args[0]).kind, ExprKind::App { .. }));

    let DeclKind::Command { args, .. } = &output.module.decls[1].kind else {
        panic!("expected a command");
    };
    assert!(args.is_empty());
}

#[test]
fn declaration_spans_cover_their_line() {
    let source = "f x = x\ng = 2";
    let (output, _) = parse_ok(source);
    let spans: Vec<_> = output
        .module
        .decls
        .iter()
        .map(|decl| decl.span.slice(source))
        .collect();
    assert_eq!(spans, ["f x = x", "g = 2"]);
}

// Errors and recovery

#[test]
fn strict_mode_returns_the_first_error() {
    let interner = StringInterner::new();
    let result = parse_source("f x = + 1\ng = )", &interner, ParseOptions::strict());
    let Err(SourceError::Parse(err)) = result else {
        panic!("expected a parse error, got {result:?}");
    };
    assert_eq!(err.code, ErrorCode::E1002);
    assert_eq!(err.position, Position::new(1, 7));
    assert_eq!(err.found, "operator");
}

#[test]
fn lenient_mode_keeps_the_next_declaration() {
    let (output, interner) = parse_lenient("f x = + 1\ng = 1");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].code, ErrorCode::E1002);
    assert_eq!(output.errors[0].context, Some("the right-hand side of a clause"));

    let names: Vec<_> = output
        .module
        .decls
        .iter()
        .map(|decl| decl_name(&interner, decl))
        .collect();
    assert_eq!(names, ["g"]);
}

#[test]
fn lenient_mode_collects_one_error_per_bad_declaration() {
    let (output, interner) = parse_lenient("a = )\nb = 1\nc = (1\nd = 2");
    let codes: Vec<_> = output.errors.iter().map(|e| e.code).collect();
    assert_eq!(codes, [ErrorCode::E1002, ErrorCode::E1003]);

    let names: Vec<_> = output
        .module
        .decls
        .iter()
        .map(|decl| decl_name(&interner, decl))
        .collect();
    assert_eq!(names, ["b", "d"]);
    assert_eq!(
        ParseOptions::lenient().recovery,
        RecoveryMode::Lenient
    );
}

#[test]
fn recovery_skips_lines_inside_an_open_group() {
    let (output, interner) = parse_lenient("f = (a\nb) +\ng = 1");
    assert_eq!(output.errors.len(), 1);
    let names: Vec<_> = output
        .module
        .decls
        .iter()
        .map(|decl| decl_name(&interner, decl))
        .collect();
    assert_eq!(names, ["g"]);
}

#[test]
fn unclosed_group_points_at_its_opener() {
    let err = parse_err("f = (a");
    assert_eq!(err.code, ErrorCode::E1003);
    assert_eq!(err.opened, Some(Span::new(4, 5)));
    assert_eq!(err.found, "end of file");
    assert!(err.expected.contains(TokenTag::RParen));
    assert!(err.expected.contains(TokenTag::Comma));
}

#[test]
fn trailing_attributes_need_a_declaration() {
    let err = parse_err("f = 1\n//! dangling\n");
    assert_eq!(err.code, ErrorCode::E1008);

    let err = parse_err("@inline");
    assert_eq!(err.code, ErrorCode::E1008);
}

#[test]
fn stray_token_is_not_a_declaration() {
    let err = parse_err(") = 1");
    assert_eq!(err.code, ErrorCode::E1009);
    assert_eq!(err.found, "`)`");
    assert!(err.expected.contains(TokenTag::Ident));
    assert!(err.expected.contains(TokenTag::Inductive));
    assert!(err.expected.contains(TokenTag::Using));
}

#[test]
fn declaration_must_end_the_line() {
    let err = parse_err("f : Nat )");
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.found, "`)`");
    assert!(err.expected.contains(TokenTag::Newline));
}

#[test]
fn innermost_context_names_the_failure() {
    let err = parse_err("f = match x { | }");
    assert_eq!(err.code, ErrorCode::E1005);
    assert_eq!(err.context, Some("a match arm"));
}

#[test]
fn lex_errors_come_through_parse_source() {
    let interner = StringInterner::new();
    let result = parse_source("f = \"open", &interner, ParseOptions::default());
    let Err(err @ SourceError::Lex(_)) = result else {
        panic!("expected a lex error, got {result:?}");
    };
    assert_eq!(err.span().start, 4);
    assert_eq!(err.to_diagnostic().code, err.code());
}

// Diagnostics

#[test]
fn diagnostic_carries_expected_and_found() {
    let diag = parse_err("f = (a").to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1003);
    assert_eq!(diag.found, Some("end of file"));
    assert!(diag.expected.contains(&"`)`"));
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.labels[1].span, Span::new(4, 5));
}

#[test]
fn diagnostic_notes_the_context() {
    let diag = parse_err("f = match x { | }").to_diagnostic();
    assert_eq!(diag.notes, ["while parsing a match arm"]);
}

#[test]
fn diagnostic_renders_against_the_source() {
    let source = "f = (a";
    let diag = parse_err(source).to_diagnostic();
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source("main.sol", source);
    emitter.emit(&diag);
    emitter.flush();
    let out = String::from_utf8(emitter.into_inner()).unwrap();

    assert!(out.starts_with("error[E1003]: expected `)` to close the group"));
    assert!(out.contains("main.sol:1:7"));
    assert!(out.contains("unclosed delimiter opened here"));
}

// Threads

#[test]
fn files_parse_in_parallel_with_one_interner() {
    let interner = StringInterner::new();
    let sources: Vec<String> = (0..8)
        .map(|i| format!("f{i} : Nat -> Nat\nf{i} x = x + {i}"))
        .collect();

    let outputs: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = sources
            .iter()
            .map(|source| {
                let interner = &interner;
                scope.spawn(move || parse_source(source, interner, ParseOptions::default()))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap())
            .collect()
    });

    for (i, output) in outputs.iter().enumerate() {
        let names: Vec<_> = output
            .module
            .decls
            .iter()
            .map(|decl| decl_name(&interner, decl))
            .collect();
        assert_eq!(names, [format!("f{i}"), format!("f{i}")]);
    }
    // Every file interned `x` to the same name.
    let x = interner.intern("x");
    for output in &outputs {
        let DeclKind::Clause { patterns, .. } = &output.module.decls[1].kind else {
            panic!("expected a clause");
        };
        let sol_ir::ast::PatternKind::Constructor { path, .. } =
            &output.arena.get_pattern(patterns[0]).kind
        else {
            panic!("expected a name pattern");
        };
        assert_eq!(path.first().name, x);
    }
}
