//! Type detection and value coercion for model lines

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::number::parse_model_number;
use crate::value::Value;

/// Declared scalar type of a model line.
///
/// Type tokens other than `s`, `n`, `d`, `b` still count as a declaration
/// but carry no scalar meaning; such lines produce empty objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TypeCode {
    Str,
    Num,
    Date,
    Bool,
    Obj,
}

impl TypeCode {
    #[inline]
    fn from_letter(b: u8) -> Self {
        match b.to_ascii_lowercase() {
            b's' => TypeCode::Str,
            b'n' => TypeCode::Num,
            b'd' => TypeCode::Date,
            b'b' => TypeCode::Bool,
            _ => TypeCode::Obj,
        }
    }
}

#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Match `name<whitespace>typeToken` at the start of a line whose array
/// markers were already stripped. The type is the first letter of the type
/// token; the rest of the line is ignored here.
pub(crate) fn detect_type(stripped: &str) -> Option<TypeCode> {
    let b = stripped.as_bytes();
    let mut i = 0usize;
    while i < b.len() && is_word_byte(b[i]) {
        i += 1;
    }
    if i == 0 {
        return None;
    }
    let mut j = i;
    while j < b.len() && b[j].is_ascii_whitespace() {
        j += 1;
    }
    if j == i || j >= b.len() || !is_word_byte(b[j]) {
        return None;
    }
    Some(TypeCode::from_letter(b[j]))
}

/// Coerce one scalar. `raw` is the trimmed text after `=`, or `None` when
/// the line had no `=`; every type has a structural default for that case.
pub(crate) fn scalar_value(code: TypeCode, raw: Option<&str>) -> Value {
    let raw = raw.unwrap_or("");
    match code {
        TypeCode::Str => Value::String(raw.to_string()),
        TypeCode::Num => Value::Number(parse_model_number(raw)),
        TypeCode::Bool => Value::Bool(raw == "true"),
        TypeCode::Date => Value::String(date_string(raw)),
        TypeCode::Obj => Value::Object(Vec::new()),
    }
}

/// Coerce an array line's value: comma-separated segments, each trimmed and
/// coerced on its own. A line without `=` yields an empty array.
pub(crate) fn list_value(code: TypeCode, raw: Option<&str>) -> Value {
    match raw {
        Some(raw) => Value::Array(
            raw.split(',')
                .map(|seg| scalar_value(code, Some(seg.trim())))
                .collect(),
        ),
        None => Value::Array(Vec::new()),
    }
}

/// ISO-8601 UTC string for a `d`-typed value. Empty or unparseable text
/// yields the current instant; bad dates never abort a conversion.
fn date_string(raw: &str) -> String {
    parse_date(raw).to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_date(raw: &str) -> DateTime<Utc> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc);
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return naive.and_utc();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return naive.and_utc();
        }
    }
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    #[test]
    fn test_detect_type() {
        assert_eq!(detect_type("id s = 1"), Some(TypeCode::Str));
        assert_eq!(detect_type("amount n = 100"), Some(TypeCode::Num));
        assert_eq!(detect_type("when d"), Some(TypeCode::Date));
        assert_eq!(detect_type("demo b = true"), Some(TypeCode::Bool));
        assert_eq!(detect_type("x t = 1"), Some(TypeCode::Obj)); // unknown token
        assert_eq!(detect_type("amount N = 1"), Some(TypeCode::Num)); // case folded
        // Only the first letter of the type token counts
        assert_eq!(detect_type("total number"), Some(TypeCode::Num));

        assert_eq!(detect_type("name = test"), None); // '=' is not a word char
        assert_eq!(detect_type("person"), None);
        assert_eq!(detect_type("this.that s = x"), None); // dot stops the name run
        assert_eq!(detect_type(""), None);
    }

    #[test]
    fn test_scalar_defaults() {
        assert_eq!(scalar_value(TypeCode::Str, None), Value::String(String::new()));
        assert_eq!(
            scalar_value(TypeCode::Num, None),
            Value::Number(Number::I64(0))
        );
        assert_eq!(scalar_value(TypeCode::Bool, None), Value::Bool(false));
        assert_eq!(scalar_value(TypeCode::Obj, None), Value::Object(Vec::new()));
    }

    #[test]
    fn test_scalar_bool_is_literal_true_only() {
        assert_eq!(scalar_value(TypeCode::Bool, Some("true")), Value::Bool(true));
        assert_eq!(scalar_value(TypeCode::Bool, Some("True")), Value::Bool(false));
        assert_eq!(scalar_value(TypeCode::Bool, Some("1")), Value::Bool(false));
    }

    #[test]
    fn test_list_values() {
        assert_eq!(
            list_value(TypeCode::Str, Some("1, 2, 3")),
            Value::Array(vec![
                Value::String("1".to_string()),
                Value::String("2".to_string()),
                Value::String("3".to_string()),
            ])
        );
        assert_eq!(
            list_value(TypeCode::Num, Some("1, x")),
            Value::Array(vec![
                Value::Number(Number::I64(1)),
                Value::Number(Number::I64(0)),
            ])
        );
        // '=' with nothing after it still coerces one empty segment
        assert_eq!(
            list_value(TypeCode::Str, Some("")),
            Value::Array(vec![Value::String(String::new())])
        );
        assert_eq!(list_value(TypeCode::Num, None), Value::Array(Vec::new()));
    }

    #[test]
    fn test_date_values() {
        assert_eq!(
            scalar_value(TypeCode::Date, Some("2017-03-09T12:34:56.789Z")),
            Value::String("2017-03-09T12:34:56.789Z".to_string())
        );
        assert_eq!(
            scalar_value(TypeCode::Date, Some("2017-02-10")),
            Value::String("2017-02-10T00:00:00.000Z".to_string())
        );
        // Offset input normalizes to UTC
        assert_eq!(
            scalar_value(TypeCode::Date, Some("2017-03-09T12:00:00+02:00")),
            Value::String("2017-03-09T10:00:00.000Z".to_string())
        );
    }

    #[test]
    fn test_bad_date_degrades_to_now() {
        let before = Utc::now();
        let parsed = parse_date("not a date");
        let after = Utc::now();
        assert!(parsed >= before && parsed <= after);
    }
}
