//! Currency display formatting
//!
//! Values are converted from base currency with `display = base * rate_from_base`,
//! rounded half away from zero to cents, grouped in thousands with `,`, and
//! prefixed with the currency symbol. Whole amounts drop the fractional part.

use super::code::CurrencyCode;
use super::table::CurrencyTable;
use crate::error::{ProjectionError, Result};

/// Format a base-currency amount in `code` using the standard table
///
/// The amount is rounded to cents first; if the rounded amount is whole the
/// fraction is omitted, so `999.999` renders as `$1,000` and `52.5` as `$52.50`.
pub fn format(value_in_base: f64, code: CurrencyCode) -> String {
    format_display(value_in_base * code.default_rate(), code.symbol())
}

/// Format with a currency code given as text, e.g. from a request body
pub fn format_code(value_in_base: f64, code: &str) -> Result<String> {
    let code: CurrencyCode = code.parse()?;
    CurrencyTable::standard().format(value_in_base, code)
}

/// Render an already-converted amount with `symbol`
pub fn format_display(display_value: f64, symbol: &str) -> String {
    if !display_value.is_finite() {
        return format!("{}{}", symbol, display_value);
    }

    // Beyond 2^53 an f64 cannot hold individual cents
    let cents = (display_value.abs() * 100.0).round();
    let (whole, fraction) = if cents < EXACT_CENTS_LIMIT {
        let fraction = cents % 100.0;
        ((cents - fraction) / 100.0, fraction as u8)
    } else {
        ((cents / 100.0).trunc(), 0)
    };

    let sign = if display_value < 0.0 && cents > 0.0 { "-" } else { "" };
    let grouped = group_thousands(&format!("{:.0}", whole));

    if fraction == 0 {
        format!("{}{}{}", sign, symbol, grouped)
    } else {
        format!("{}{}{}.{:02}", sign, symbol, grouped, fraction)
    }
}

const EXACT_CENTS_LIMIT: f64 = 9_007_199_254_740_992.0;

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_base_currency_formatting() {
        assert_eq!(format(5500.0, CurrencyCode::USD), "$5,500");
        assert_eq!(format(52.5, CurrencyCode::USD), "$52.50");
        assert_eq!(format(0.0, CurrencyCode::USD), "$0");
        assert_eq!(format(999.999, CurrencyCode::USD), "$1,000");
        assert_eq!(format(1_234_567.891, CurrencyCode::USD), "$1,234,567.89");
    }

    #[test]
    fn test_conversion_direction_fixture() {
        // 1 USD shown in rupees is a larger number, not a smaller one
        assert_eq!(format(1.0, CurrencyCode::INR), "₹83.12");
        assert_eq!(format(100.0, CurrencyCode::JPY), "¥14,950");
        assert_eq!(format(100.0, CurrencyCode::EUR), "€92");
        assert_eq!(format(10.0, CurrencyCode::GBP), "£7.90");
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(format_display(0.125, "$"), "$0.13");
        assert_eq!(format_display(2.5, "$"), "$2.50");
        assert_eq!(format_display(0.004, "$"), "$0");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_display(-1234.5, "€"), "-€1,234.50");
        assert_eq!(format_display(-0.001, "€"), "€0");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(format_display(f64::NAN, "$"), "$NaN");
        assert_eq!(format_display(f64::INFINITY, "$"), "$inf");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("12345678"), "12,345,678");
    }

    fn digit_count(s: &str) -> usize {
        s.chars().filter(|c| c.is_ascii_digit()).count()
    }

    #[test]
    fn test_very_large_amounts_keep_their_magnitude() {
        let e40 = format(1e40, CurrencyCode::USD);
        let e50 = format(1e50, CurrencyCode::USD);

        assert_ne!(e40, e50);
        assert_eq!(digit_count(&e40), 41);
        assert_eq!(digit_count(&e50), 51);
        assert!(!e40.contains('.'));
        assert!(e50.starts_with("$100,000,000,000,000,0"));
    }

    #[test]
    fn test_large_cent_amounts_near_precision_limit() {
        assert_eq!(format_display(12_345_678_901_234.5, "$"), "$12,345,678,901,234.50");
        assert_eq!(format_display(-90_000_000_000_000.0, "$"), "-$90,000,000,000,000");
    }

    #[test]
    fn test_fast_growth_projection_formats_at_full_magnitude() {
        let snapshots =
            crate::projection::simulate(&crate::ProjectionAssumptions::new(100.0, 300.0, 50.0, 0.0, 60)).unwrap();
        let revenue = snapshots[59].monthly_revenue;
        assert!(revenue > 1e39);

        let shown = format(revenue, CurrencyCode::USD);
        assert_eq!(digit_count(&shown), revenue.log10().floor() as usize + 1);
    }

    #[test]
    fn test_format_code_text_input() {
        assert_eq!(format_code(1.0, "inr").unwrap(), "₹83.12");
        assert_eq!(
            format_code(1.0, "AUD"),
            Err(ProjectionError::UnknownCurrency("AUD".to_string()))
        );
    }

    fn parse_display(s: &str, symbol: &str) -> f64 {
        s.trim_start_matches(symbol).replace(',', "").parse().unwrap()
    }

    proptest! {
        #[test]
        fn prop_formatted_value_round_trips_to_base(
            cents in 0u64..100_000_000,
            idx in 0usize..5,
        ) {
            let code = CurrencyCode::ALL[idx];
            let base = cents as f64 / 100.0;
            let shown = parse_display(&format(base, code), code.symbol());
            let back = shown / code.default_rate();
            // Display rounding is at most half a cent in the target currency
            let tolerance = 0.005 / code.default_rate() + 1e-9;
            prop_assert!((back - base).abs() <= tolerance);
        }

        #[test]
        fn prop_at_most_two_fraction_digits(value in 0.0f64..1e9) {
            let s = format(value, CurrencyCode::USD);
            if let Some((_, frac)) = s.split_once('.') {
                prop_assert_eq!(frac.len(), 2);
                prop_assert!(frac != "00");
            }
        }
    }
}
