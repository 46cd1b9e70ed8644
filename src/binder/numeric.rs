//! Number parsing and rounding shared by the binder.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Leading decimal number, optionally signed, with an optional exponent.
static LEADING_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("Invalid number regex")
});

/// Parse the number a sensor value starts with.
///
/// Trailing text is ignored, so `"310.9 ft"` parses as `310.9`. Returns `None`
/// when the value does not start with a number or the result is not finite.
pub fn parse_number(text: &str) -> Option<f64> {
    let matched = LEADING_NUMBER_REGEX.find(text.trim())?;
    matched
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Numeric value of an attribute: JSON numbers and numeric strings.
pub fn attribute_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

/// Round to the nearest integer, ties away from zero (`2.5 -> 3`, `-2.5 -> -3`).
///
/// Values beyond the `i64` range saturate.
pub fn round_half_away(value: f64) -> i64 {
    value.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_number("1820.4"), Some(1820.4));
        assert_eq!(parse_number("-4.3"), Some(-4.3));
        assert_eq!(parse_number("+7"), Some(7.0));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
    }

    #[test]
    fn test_parse_ignores_units_and_whitespace() {
        assert_eq!(parse_number("  310.9 ft"), Some(310.9));
        assert_eq!(parse_number("55.2 mph"), Some(55.2));
        assert_eq!(parse_number("12°"), Some(12.0));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("unknown"), None);
        assert_eq!(parse_number("ft 310"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("-"), None);
    }

    #[test]
    fn test_attribute_number() {
        assert_eq!(attribute_number(&json!(182.6)), Some(182.6));
        assert_eq!(attribute_number(&json!(0)), Some(0.0));
        assert_eq!(attribute_number(&json!("45")), Some(45.0));
        assert_eq!(attribute_number(&json!("north")), None);
        assert_eq!(attribute_number(&json!(null)), None);
        assert_eq!(attribute_number(&json!([1, 2])), None);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_half_away(2.5), 3);
        assert_eq!(round_half_away(-2.5), -3);
        assert_eq!(round_half_away(1820.5), 1821);
        assert_eq!(round_half_away(1820.4), 1820);
        assert_eq!(round_half_away(-0.4), 0);
        assert_eq!(round_half_away(f64::MAX), i64::MAX);
    }
}
