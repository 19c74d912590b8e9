use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// Locale conventions for rendering money.
///
/// One format is chosen at startup; users cannot switch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub grouping_separator: char,
    pub decimal_separator: char,
    pub symbol: String,
    /// Shown instead of a number when the value is `NaN` or infinite
    pub placeholder: String,
}

impl CurrencyFormat {
    /// Euro amounts written the Italian way: `1.234,50 €`
    pub fn italian_euro() -> Self {
        Self {
            grouping_separator: '.',
            decimal_separator: ',',
            symbol: "€".to_string(),
            placeholder: "---".to_string(),
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::italian_euro()
    }
}

/// Formats every monetary value on the page so they all read the same
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurrencyFormatter {
    format: CurrencyFormat,
}

impl CurrencyFormatter {
    pub fn new(format: CurrencyFormat) -> Self {
        Self { format }
    }

    pub fn placeholder(&self) -> &str {
        &self.format.placeholder
    }

    /// Render `value` with two fraction digits, rounding half away from zero.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return self.format.placeholder.clone();
        }

        let (negative, digits) = match Decimal::from_f64_retain(value) {
            Some(exact) => {
                let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
                (rounded.is_sign_negative() && !rounded.is_zero(), format!("{:.2}", rounded.abs()))
            }
            // Beyond Decimal's range; cents no longer matter at that magnitude
            None => (value < 0.0, format!("{:.2}", value.abs())),
        };

        let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let mut out = String::with_capacity(digits.len() + 8);
        if negative {
            out.push('-');
        }
        out.push_str(&group_thousands(integer, self.format.grouping_separator));
        out.push(self.format.decimal_separator);
        out.push_str(fraction);
        out.push('\u{a0}');
        out.push_str(&self.format.symbol);
        out
    }
}

fn group_thousands(integer: &str, separator: char) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1234.5, "1.234,50\u{a0}€")]
    #[case(0.0, "0,00\u{a0}€")]
    #[case(7.0, "7,00\u{a0}€")]
    #[case(999.999, "1.000,00\u{a0}€")]
    #[case(1_000_000.0, "1.000.000,00\u{a0}€")]
    #[case(123456.789, "123.456,79\u{a0}€")]
    #[case(-272.8978, "-272,90\u{a0}€")]
    #[case(0.125, "0,13\u{a0}€")]
    fn test_format_italian_euro(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(CurrencyFormatter::default().format(value), expected);
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn test_non_finite_values_use_placeholder(#[case] value: f64) {
        assert_eq!(CurrencyFormatter::default().format(value), "---");
    }

    #[test]
    fn test_tiny_negative_drift_is_not_signed() {
        assert_eq!(CurrencyFormatter::default().format(-4.0e-11), "0,00\u{a0}€");
    }

    #[test]
    fn test_huge_values_still_format() {
        let formatted = CurrencyFormatter::default().format(1.0e30);
        assert!(formatted.starts_with("1.000.000"));
        assert!(formatted.ends_with(",00\u{a0}€"));
    }

    #[test]
    fn test_custom_format() {
        let formatter = CurrencyFormatter::new(CurrencyFormat {
            grouping_separator: ',',
            decimal_separator: '.',
            symbol: "$".to_string(),
            placeholder: "n/a".to_string(),
        });

        assert_eq!(formatter.format(1234.5), "1,234.50\u{a0}$");
        assert_eq!(formatter.format(f64::NAN), "n/a");
        assert_eq!(formatter.placeholder(), "n/a");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1", '.'), "1");
        assert_eq!(group_thousands("123", '.'), "123");
        assert_eq!(group_thousands("1234", '.'), "1.234");
        assert_eq!(group_thousands("1234567", '.'), "1.234.567");
    }
}
