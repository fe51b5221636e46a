//! Property-based tests for tip calculation and input parsing.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::calculator::{calculate_tip, compute_tip};
use crate::format::LocaleFormatter;
use crate::input::parse_amount;

/// Strategy to generate non-negative bill amounts (0.00 to 1,000,000.00).
fn bill_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate tip percentages (0.0 to 100.0).
fn tip_percent() -> impl Strategy<Value = Decimal> {
    (0i64..=1000i64).prop_map(|tenths| Decimal::new(tenths, 1))
}

/// Parses a formatted en_US amount back to a decimal for ordering checks.
fn unformat(text: &str) -> Decimal {
    let digits: String = text.chars().filter(|c| *c != '$' && *c != ',').collect();
    digits.parse().unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Same inputs and locale always give the same string.
    #[test]
    fn prop_compute_tip_is_deterministic(
        amount in bill_amount(),
        percent in tip_percent(),
        round_up in any::<bool>(),
    ) {
        let formatter = LocaleFormatter::default();
        let first = compute_tip(amount, Some(percent), round_up, &formatter);
        let second = compute_tip(amount, Some(percent), round_up, &formatter);
        prop_assert_eq!(first, second);
    }

    /// For a fixed percent and policy, a larger bill never gives a smaller tip.
    #[test]
    fn prop_tip_non_decreasing_in_amount(
        a in bill_amount(),
        b in bill_amount(),
        percent in tip_percent(),
        round_up in any::<bool>(),
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        prop_assert!(calculate_tip(low, percent, round_up) <= calculate_tip(high, percent, round_up));

        let formatter = LocaleFormatter::default();
        let low_text = compute_tip(low, Some(percent), round_up, &formatter);
        let high_text = compute_tip(high, Some(percent), round_up, &formatter);
        prop_assert!(
            unformat(&low_text) <= unformat(&high_text),
            "{} > {}", low_text, high_text
        );
    }

    /// Rounding up never lowers the tip and always yields a whole number.
    #[test]
    fn prop_round_up_is_ceiling(
        amount in bill_amount(),
        percent in tip_percent(),
    ) {
        let exact = calculate_tip(amount, percent, false);
        let rounded = calculate_tip(amount, percent, true);
        prop_assert!(rounded >= exact);
        prop_assert!(rounded - exact < Decimal::ONE);
        prop_assert_eq!(rounded, rounded.trunc());
    }

    /// Zero bill gives zero tip whatever the percent.
    #[test]
    fn prop_zero_amount_zero_tip(
        percent in tip_percent(),
        round_up in any::<bool>(),
    ) {
        let formatter = LocaleFormatter::default();
        prop_assert_eq!(compute_tip(Decimal::ZERO, Some(percent), round_up, &formatter), "$0.00");
    }

    /// The parser accepts anything without panicking.
    #[test]
    fn prop_parse_never_panics(raw in any::<String>()) {
        let _ = parse_amount(&raw);
    }

    /// Surrounding whitespace does not change the parsed value.
    #[test]
    fn prop_parse_ignores_padding(
        raw in "[-+]?[0-9]{0,6}(\\.[0-9]{0,4})?",
        left in "[ \\t]{0,3}",
        right in "[ \\t\\n]{0,3}",
    ) {
        let padded = format!("{left}{raw}{right}");
        prop_assert_eq!(parse_amount(&padded), parse_amount(&raw));
    }
}
