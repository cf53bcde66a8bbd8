use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;
use sol_ir::Span;

fn render(emitter: TerminalEmitter<Vec<u8>>, diag: &Diagnostic) -> String {
    let mut emitter = emitter;
    emitter.emit(diag);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap_or_default()
}

fn sample() -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001)
        .with_message("expected `=`, found `)`")
        .with_label(Span::new(10, 11), "unexpected token")
        .with_expected(["`=`", "identifier"])
        .with_found("`)`")
}

#[test]
fn plain_output_without_source() {
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, true);
    let out = render(emitter, &sample());
    assert_eq!(
        out,
        "error[E1001]: expected `=`, found `)`\n\
         \x20 --> 10..11: unexpected token\n\
         \x20 = expected: one of `=`, identifier\n\n"
    );
}

#[test]
fn source_snippet_with_caret() {
    let source = "Nat : U\nf x = a + )\n";
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_message("expected expression")
        .with_label(Span::new(18, 19), "here");
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source("main.sol", source);
    let out = render(emitter, &diag);
    assert_eq!(
        out,
        "error[E1002]: expected expression\n\
         \x20--> main.sol:2:11\n\
         \x20 |\n\
         2 | f x = a + )\n\
         \x20 |           ^ here\n\n"
    );
}

#[test]
fn colors_follow_mode() {
    let colored = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
    assert!(render(colored, &sample()).contains("\x1b[1;31m"));

    let auto_no_tty = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Auto, false);
    assert!(!render(auto_no_tty, &sample()).contains('\x1b'));
}

#[test]
fn summary_pluralizes() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_summary(2, 1);
    let out = String::from_utf8(emitter.into_inner()).unwrap_or_default();
    assert_eq!(
        out,
        "error: aborting due to 2 previous errors\nwarning: 1 warning emitted\n"
    );
}

#[test]
fn expected_summary_shapes() {
    let none = Diagnostic::error(ErrorCode::E1009);
    assert_eq!(none.expected_summary(), None);
    let one = Diagnostic::error(ErrorCode::E1001).with_expected(["`)`"]);
    assert_eq!(one.expected_summary().as_deref(), Some("`)`"));
    assert!(sample().is_error());
    assert_eq!(sample().primary_span(), Some(Span::new(10, 11)));
    assert_eq!(sample().to_string(), "error[E1001]: expected `=`, found `)`");
}

#[test]
fn error_codes_are_phase_tagged() {
    for code in ErrorCode::ALL {
        assert!(code.is_lexer_error() ^ code.is_parser_error());
        assert!(!code.description().is_empty());
    }
    assert!(ErrorCode::E0003.is_lexer_error());
    assert!(ErrorCode::E1007.is_parser_error());
}
