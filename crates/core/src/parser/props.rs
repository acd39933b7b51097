//! Property-based tests for parsing.
//!
//! - Rendering then re-parsing keeps the magnitude bucket and currency
//! - Ambiguous currency placement is always rejected
//! - Several decimal separators are always rejected

use proptest::prelude::*;

use moneytext_shared::MoneyError;

use super::{parse, parse_comma};
use crate::amount::{Amount, Magnitude};
use crate::currency::CurrencyTable;

/// Strategy to generate a bucket and a two-decimal mantissa (1.00 to 999.99).
fn bucketed_quantity() -> impl Strategy<Value = (Magnitude, f64)> {
    let magnitude = prop::sample::select(vec![
        Magnitude::Unit,
        Magnitude::Thousand,
        Magnitude::Million,
    ]);
    (magnitude, 100u32..100_000u32).prop_map(|(magnitude, cents)| {
        (magnitude, f64::from(cents) / 100.0 * magnitude.multiplier())
    })
}

/// Strategy to pick a canonical symbol or none.
fn currency() -> impl Strategy<Value = String> {
    let mut symbols: Vec<String> = CurrencyTable::builtin()
        .symbols()
        .map(str::to_string)
        .collect();
    symbols.push(String::new());
    prop::sample::select(symbols)
}

/// Strategy to pick a currency alias.
fn alias() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["$", "€", "usd", "eur", "gbp", "leur"])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Re-parsing a rendered amount lands in the same bucket with the same
    /// currency and renders identically.
    #[test]
    fn prop_round_trip_keeps_bucket_and_currency(
        (magnitude, quantity) in bucketed_quantity(),
        cur in currency(),
    ) {
        let amount = Amount::new(quantity, cur.clone());
        let rendered = amount.to_string();
        let parsed = parse(&rendered).unwrap();

        prop_assert_eq!(Magnitude::for_quantity(parsed.quantity()), magnitude);
        prop_assert_eq!(parsed.currency(), cur.as_str());
        prop_assert_eq!(parsed.to_string(), rendered);
    }

    /// The comma variant reads back what the comma rendering writes.
    #[test]
    fn prop_comma_round_trip(
        (_magnitude, quantity) in bucketed_quantity(),
        cur in currency(),
    ) {
        let amount = Amount::new(quantity, cur);
        let parsed = parse_comma(&amount.to_string_comma()).unwrap();
        prop_assert_eq!(parsed.to_string(), amount.to_string());
    }

    /// A currency on both sides is rejected whatever the tokens are.
    #[test]
    fn prop_currency_on_both_sides_rejected(
        left in alias(),
        right in alias(),
        n in 1u32..10_000_000,
    ) {
        let text = format!("{left} {n} {right}");
        prop_assert!(matches!(parse(&text), Err(MoneyError::InvalidFormat(_))));
    }

    /// Two decimal points in the number are rejected.
    #[test]
    fn prop_two_separators_rejected(
        a in 0u32..1000,
        b in 0u32..1000,
        c in 0u32..1000,
        cur in alias(),
    ) {
        let text = format!("{a}.{b}.{c} {cur}");
        prop_assert!(matches!(parse(&text), Err(MoneyError::InvalidNumber(_))));
    }

    /// Plain integers parse to themselves without a currency.
    #[test]
    fn prop_plain_integers(n in 0u32..u32::MAX) {
        let amount = parse(&n.to_string()).unwrap();
        prop_assert_eq!(amount.quantity(), f64::from(n));
        prop_assert!(!amount.has_currency());
    }
}
