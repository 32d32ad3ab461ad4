//! Numeric coercion for `n`-typed model values.

use crate::value::Number;

/// True when the token is an optional sign followed by ASCII digits only.
#[inline]
pub(crate) fn is_integer_shaped(s: &str) -> bool {
    let b = s.as_bytes();
    let digits = match b.first() {
        Some(b'-') | Some(b'+') => &b[1..],
        _ => b,
    };
    !digits.is_empty() && digits.iter().all(|c| c.is_ascii_digit())
}

/// Numeric interpretation of raw model text.
///
/// Integer-shaped tokens that fit map to `I64`/`U64` so whole numbers render
/// without a fractional part. Text that fails to parse as a number, or parses
/// as NaN, degrades to `0`; malformed numbers never abort a conversion.
pub(crate) fn parse_model_number(s: &str) -> Number {
    if is_integer_shaped(s) {
        if let Ok(i) = s.parse::<i64>() {
            return Number::I64(i);
        }
        if let Ok(u) = s.parse::<u64>() {
            return Number::U64(u);
        }
    }
    match s.parse::<f64>() {
        // Integral floats print without a fractional part, so `4.0` and
        // `2e3` come out as `4` and `2000`. Limited to the range where f64
        // holds integers exactly.
        Ok(f) if !f.is_nan() => {
            const EXACT: f64 = 9_007_199_254_740_992.0; // 2^53
            if f.fract() == 0.0 && f.abs() <= EXACT {
                Number::I64(f as i64)
            } else {
                Number::F64(f)
            }
        }
        _ => Number::I64(0),
    }
}
