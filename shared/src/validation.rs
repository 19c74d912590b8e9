//! Form input helpers: lenient number parsing and the required-field check
//! that gates submit buttons.

use serde::{Deserialize, Serialize};

/// Parse a numeric form field the way browsers' `parseFloat` does.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"12abc"` reads as `12`. Anything without such a prefix is `NaN`.
pub fn parse_decimal_field(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let prefix = numeric_prefix(trimmed);
    if prefix.is_empty() {
        return f64::NAN;
    }

    prefix.parse::<f64>().unwrap_or(f64::NAN)
}

fn numeric_prefix(text: &str) -> &str {
    if let Some(rest) = text.strip_prefix('+').or_else(|| text.strip_prefix('-')) {
        if rest.starts_with("Infinity") {
            return &text[..1 + "Infinity".len()];
        }
    } else if text.starts_with("Infinity") {
        return &text[.."Infinity".len()];
    }

    let bytes = text.as_bytes();
    let mut end = 0;
    let mut last_valid = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
                last_valid = end;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
                if seen_digit {
                    last_valid = end;
                }
            }
            _ => break,
        }
    }

    if !seen_digit {
        return "";
    }

    // Optional exponent, only kept when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            last_valid = exp_end;
        }
    }

    &text[..last_valid]
}

/// What kind of control a required field is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Checkbox { checked: bool },
}

/// Current state of one field marked `required`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredField {
    pub value: String,
    pub kind: FieldKind,
}

impl RequiredField {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: FieldKind::Text,
        }
    }

    pub fn checkbox(checked: bool) -> Self {
        Self {
            // Browsers report "on" for a checkbox without an explicit value
            value: "on".to_string(),
            kind: FieldKind::Checkbox { checked },
        }
    }

    pub fn is_satisfied(&self) -> bool {
        if self.value.trim().is_empty() {
            return false;
        }
        match self.kind {
            FieldKind::Text => true,
            FieldKind::Checkbox { checked } => checked,
        }
    }
}

/// True when every required field is filled in and every checkbox ticked.
///
/// Evaluated from scratch on each input/change event.
pub fn is_form_complete(fields: &[RequiredField]) -> bool {
    fields.iter().all(RequiredField::is_satisfied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("10000", 10000.0)]
    #[case("  5.5", 5.5)]
    #[case("12abc", 12.0)]
    #[case("3.2%", 3.2)]
    #[case("-4", -4.0)]
    #[case(".5", 0.5)]
    #[case("7.", 7.0)]
    #[case("1e3", 1000.0)]
    #[case("2e", 2.0)]
    #[case("1.2.3", 1.2)]
    fn test_parse_decimal_field(#[case] raw: &str, #[case] expected: f64) {
        assert_eq!(parse_decimal_field(raw), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("abc")]
    #[case(".")]
    #[case("-")]
    #[case("e5")]
    fn test_parse_decimal_field_nan(#[case] raw: &str) {
        assert!(parse_decimal_field(raw).is_nan());
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_decimal_field("Infinity"), f64::INFINITY);
        assert_eq!(parse_decimal_field("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_form_complete() {
        let fields = vec![
            RequiredField::text("Mario Rossi"),
            RequiredField::text("mario@example.com"),
            RequiredField::checkbox(true),
        ];
        assert!(is_form_complete(&fields));
    }

    #[test]
    fn test_blank_text_field_blocks_submit() {
        let fields = vec![RequiredField::text("Mario"), RequiredField::text("   ")];
        assert!(!is_form_complete(&fields));
    }

    #[test]
    fn test_unchecked_checkbox_blocks_submit() {
        let fields = vec![RequiredField::text("Mario"), RequiredField::checkbox(false)];
        assert!(!is_form_complete(&fields));
    }

    #[test]
    fn test_no_required_fields_is_complete() {
        assert!(is_form_complete(&[]));
    }
}
