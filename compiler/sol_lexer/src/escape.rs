//! Escape Sequence Processing
//!
//! `\n \r \t \0 \\ \" \'` and `\u{hex}` have their usual meaning; any other
//! escaped character stands for itself.

use crate::lex_error::LexErrorKind;

#[inline]
pub(crate) fn resolve_escape(c: char) -> char {
    match c {
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        '0' => '\0',
        other => other,
    }
}

/// Read the `{hex}` part of a `\u{hex}` escape from `chars`.
fn unicode_escape(chars: &mut std::str::Chars<'_>) -> Result<char, LexErrorKind> {
    let mut hex = String::new();
    for c in chars.by_ref() {
        if c == '}' {
            return u32::from_str_radix(&hex, 16)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| LexErrorKind::InvalidEscape {
                    escape: format!("\\u{{{hex}}}"),
                });
        }
        hex.push(c);
    }
    Err(LexErrorKind::InvalidEscape {
        escape: format!("\\u{{{hex}"),
    })
}

/// Resolve escapes in the body of a string literal (quotes stripped).
pub(crate) fn unescape_string(s: &str) -> Result<String, LexErrorKind> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('u') if chars.as_str().starts_with('{') => {
                chars.next();
                result.push(unicode_escape(&mut chars)?);
            }
            Some(esc) => result.push(resolve_escape(esc)),
            None => result.push('\\'),
        }
    }

    Ok(result)
}

/// Resolve the body of a char literal (quotes stripped) to one character.
pub(crate) fn unescape_char(s: &str) -> Result<char, LexErrorKind> {
    let text = unescape_string(s)?;
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(LexErrorKind::InvalidEscape {
            escape: s.to_owned(),
        }),
    }
}
