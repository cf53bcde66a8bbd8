use pretty_assertions::assert_eq;
use sol_ir::{StringInterner, TokenTag};

use super::*;

fn tags_of(source: &str) -> Vec<u8> {
    let interner = StringInterner::new();
    let tokens = sol_lexer::lex(source, &interner).unwrap_or_default();
    tokens.tags().to_vec()
}

#[test]
fn test_token_set_membership() {
    let set = TokenSet::new().with(TokenTag::Comma).with(TokenTag::RParen);
    assert!(set.contains(TokenTag::Comma));
    assert!(set.contains(TokenTag::RParen));
    assert!(!set.contains(TokenTag::LParen));
    assert_eq!(set.count(), 2);
    assert!(!set.is_empty());
    assert!(TokenSet::new().is_empty());
}

#[test]
fn test_token_set_covers_last_tag() {
    let set = TokenSet::single(TokenTag::Eof);
    assert!(set.contains(TokenTag::Eof));
    assert_eq!(set.count(), 1);
}

#[test]
fn test_names_in_tag_order() {
    let set = TokenSet::single(TokenTag::RParen).with(TokenTag::Comma);
    assert_eq!(set.names(), vec!["`)`", "`,`"]);
}

#[test]
fn test_union() {
    let set = LITERAL.union(IDENT_START);
    assert_eq!(set.count(), 6);
    assert!(set.contains(TokenTag::Symbol));
    assert!(PRIMARY_START.contains(TokenTag::Match));
    assert!(!ARG_START.contains(TokenTag::Match));
}

#[test]
fn test_resync_skips_to_line_break_after_error() {
    let tags = tags_of("f x = + 1\ng = 1");
    // error at `+` (index 3); the line break is index 5
    assert_eq!(resync_point(&tags, 0, 3), 5);
}

#[test]
fn test_resync_ignores_line_breaks_inside_brackets() {
    let tags = tags_of("f = (a\nb) +\ng = 1");
    // tokens: f = ( a NL b ) + NL g = 1 EOF
    assert_eq!(tags[4], TokenTag::Newline as u8);
    assert_eq!(resync_point(&tags, 0, 7), 8);
    assert_eq!(resync_point(&tags, 0, 2), 8);
}

#[test]
fn test_resync_unbalanced_falls_back_to_next_line_break() {
    let tags = tags_of("f = (a\ng = 1");
    // tokens: f = ( a NL g = 1 EOF
    assert_eq!(resync_point(&tags, 0, 3), 4);
}

#[test]
fn test_resync_unbalanced_gives_back_swallowed_lines() {
    let tags = tags_of("c = (1\nd = 2");
    // tokens: c = ( 1 NL d = 2 EOF; the missing `)` is reported at `d`
    assert_eq!(resync_point(&tags, 0, 5), 4);
}

#[test]
fn test_resync_without_line_break_reaches_eof() {
    let tags = tags_of("f = (a");
    assert_eq!(resync_point(&tags, 0, 3), tags.len() - 1);
}
