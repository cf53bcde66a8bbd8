//! Numeric Parsing Helpers
//!
//! Mantissa and suffix splitting for integer and float literals.

use sol_ir::token::{FloatLit, IntLit, NumericSuffix, Radix};

use crate::lex_error::LexErrorKind;

/// Parse digits skipping `_` separators, `None` on overflow or a bad digit.
#[inline]
pub(crate) fn parse_int_skip_underscores(s: &str, radix: u32) -> Option<u128> {
    let mut result: u128 = 0;
    for c in s.chars() {
        if c == '_' {
            continue;
        }
        let digit = c.to_digit(radix)?;
        result = result.checked_mul(u128::from(radix))?;
        result = result.checked_add(u128::from(digit))?;
    }
    Some(result)
}

/// Split `text` at the first character that is neither a digit of `radix`
/// nor `_`.
fn split_suffix(text: &str, radix: u32) -> Result<(&str, Option<NumericSuffix>), LexErrorKind> {
    let end = text
        .find(|c: char| c != '_' && !c.is_digit(radix))
        .unwrap_or(text.len());
    let (digits, suffix) = text.split_at(end);
    if suffix.is_empty() {
        return Ok((digits, None));
    }
    NumericSuffix::from_suffix(suffix)
        .map(|s| (digits, Some(s)))
        .ok_or_else(|| LexErrorKind::InvalidNumber {
            text: text.to_owned(),
        })
}

/// Cook an integer literal; `slice` includes any `0x`/`0o`/`0b` prefix.
pub(crate) fn parse_int_literal(slice: &str, radix: Radix) -> Result<IntLit, LexErrorKind> {
    let body = &slice[radix.prefix().len()..];
    let (digits, suffix) = split_suffix(body, radix.value())?;
    let value = parse_int_skip_underscores(digits, radix.value()).ok_or_else(|| {
        LexErrorKind::IntOverflow {
            text: slice.to_owned(),
        }
    })?;
    Ok(IntLit {
        value,
        radix,
        suffix,
    })
}

/// Byte offset where the suffix of a float literal starts: after the
/// fraction and any complete exponent.
fn float_suffix_start(slice: &str) -> usize {
    let bytes = slice.as_bytes();
    let digits_end = |from: usize| {
        (from..bytes.len())
            .find(|&i| !(bytes[i].is_ascii_digit() || bytes[i] == b'_'))
            .unwrap_or(bytes.len())
    };
    let dot = digits_end(0);
    let mut end = digits_end(dot + 1);
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_end = (exponent..bytes.len())
            .find(|&i| !bytes[i].is_ascii_digit())
            .unwrap_or(bytes.len());
        if exponent_end > exponent {
            end = exponent_end;
        }
    }
    end
}

/// Cook a float literal such as `1_000.5e-3f32`. Only `f32` and `f64`
/// may follow the mantissa.
pub(crate) fn parse_float_literal(slice: &str) -> Result<FloatLit, LexErrorKind> {
    let invalid = || LexErrorKind::InvalidNumber {
        text: slice.to_owned(),
    };
    let (mantissa, suffix) = slice.split_at(float_suffix_start(slice));
    let suffix = if suffix.is_empty() {
        None
    } else {
        match NumericSuffix::from_suffix(suffix) {
            Some(suffix) if suffix.is_float() => Some(suffix),
            _ => return Err(invalid()),
        }
    };
    let parsed = if mantissa.contains('_') {
        mantissa.replace('_', "").parse::<f64>()
    } else {
        mantissa.parse::<f64>()
    };
    parsed
        .map(|value| FloatLit::new(value, suffix))
        .map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn skips_underscores() {
        assert_eq!(parse_int_skip_underscores("1_000_000", 10), Some(1_000_000));
        assert_eq!(parse_int_skip_underscores("dead_beef", 16), Some(0xdead_beef));
        assert_eq!(parse_int_skip_underscores("1010", 2), Some(10));
    }

    #[test]
    fn u128_overflow_is_none() {
        let max = u128::MAX.to_string();
        assert_eq!(parse_int_skip_underscores(&max, 10), Some(u128::MAX));
        assert_eq!(parse_int_skip_underscores(&format!("{max}0"), 10), None);
    }

    #[test]
    fn int_suffixes() {
        let lit = parse_int_literal("0u8", Radix::Decimal);
        assert_eq!(lit, Ok(IntLit::decimal(0).with_suffix(NumericSuffix::U8)));
        let lit = parse_int_literal("0xffu16", Radix::Hex);
        assert_eq!(
            lit,
            Ok(IntLit {
                value: 255,
                radix: Radix::Hex,
                suffix: Some(NumericSuffix::U16),
            })
        );
        assert_eq!(
            parse_int_literal("7n", Radix::Decimal).map(|l| l.suffix),
            Ok(Some(NumericSuffix::Nat))
        );
        assert_eq!(
            parse_int_literal("42", Radix::Decimal).map(|l| l.suffix),
            Ok(None)
        );
    }

    #[test]
    fn float_suffixes() {
        let lit = parse_float_literal("1_0.25f32");
        assert_eq!(lit, Ok(FloatLit::new(10.25, Some(NumericSuffix::F32))));
        let lit = parse_float_literal("2.5e2");
        assert_eq!(lit.map(FloatLit::value), Ok(250.0));
        let lit = parse_float_literal("1.5e-1f64");
        assert_eq!(lit, Ok(FloatLit::new(0.15, Some(NumericSuffix::F64))));
    }

    #[test]
    fn float_rejects_non_float_suffixes() {
        for text in ["1.0u8", "1.0n", "1.0e", "2.5e3x", "1.0abc"] {
            assert!(
                matches!(
                    parse_float_literal(text),
                    Err(LexErrorKind::InvalidNumber { .. })
                ),
                "{text}"
            );
        }
    }

    #[test]
    fn bad_suffix_is_invalid_number() {
        assert!(matches!(
            parse_int_literal("1q", Radix::Decimal),
            Err(LexErrorKind::InvalidNumber { .. })
        ));
    }
}
