//! Property-based tests for amount rendering.

use proptest::prelude::*;

use super::{Amount, trim_decimal};

/// Strategy to generate quantities across all three magnitude buckets.
fn quantity() -> impl Strategy<Value = f64> {
    prop_oneof![0.0f64..1_000.0, 1_000.0f64..1_000_000.0, 1_000_000.0f64..1e12]
}

/// Strategy to generate a currency symbol or none.
fn currency() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["", "$", "€", "£", "R$", "CHF"])
}

/// Splits the rendered quantity off the suffix and currency.
fn numeric_part(rendered: &str) -> &str {
    let quantity = rendered.split(' ').next().unwrap_or_default();
    quantity.trim_end_matches(['K', 'M'])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Rendered numbers never carry more than two fractional digits, a
    /// trailing zero after the point, or a bare trailing point.
    #[test]
    fn prop_display_is_trimmed(q in quantity(), cur in currency()) {
        let rendered = Amount::new(q, cur).to_string();
        let number = numeric_part(&rendered);

        prop_assert!(!number.ends_with('.'), "{} ends with '.'", rendered);
        if let Some((_, fraction)) = number.split_once('.') {
            prop_assert!(fraction.len() <= 2, "{} has too many decimals", rendered);
            prop_assert!(!fraction.ends_with('0'), "{} has a trailing zero", rendered);
        }
    }

    /// The comma rendering never contains a dot.
    #[test]
    fn prop_comma_rendering_has_no_dot(q in quantity(), cur in currency()) {
        let amount = Amount::new(q, cur);
        let comma = amount.to_string_comma();
        prop_assert!(!comma.contains('.'));
        prop_assert_eq!(comma, amount.to_string().replace('.', ","));
    }

    /// The prefixed rendering carries the same characters, reordered.
    #[test]
    fn prop_before_moves_currency_to_front(q in quantity(), cur in currency()) {
        let amount = Amount::new(q, cur);
        let before = amount.to_string_before();
        prop_assert!(before.starts_with(cur));
        prop_assert!(!before.contains(' '));
        prop_assert_eq!(before.len() + usize::from(!cur.is_empty()), amount.to_string().len());
    }

    /// Trimming never leaves a negative zero.
    #[test]
    fn prop_trim_decimal_has_no_negative_zero(v in -0.004f64..0.0) {
        prop_assert_eq!(trim_decimal(v), "0");
    }
}
