//! Currency formatting behind a narrow trait.
//!
//! Display rounding follows the usual number-format default: half-even to
//! the currency's fraction digits. Formatting is infallible.

use rust_decimal::{Decimal, RoundingStrategy};
use tiptime_shared::types::{Currency, Locale, Money, NumberConventions, SymbolPosition};

/// Renders amounts as currency strings.
pub trait CurrencyFormatter {
    /// Currency used by [`CurrencyFormatter::format`].
    fn currency(&self) -> Currency;

    /// Formats an amount already tagged with a currency.
    fn format_money(&self, money: &Money) -> String;

    /// Formats an amount in this formatter's currency.
    fn format(&self, amount: Decimal) -> String {
        self.format_money(&Money::new(amount, self.currency()))
    }
}

/// Formats with the conventions of one fixed locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFormatter {
    conventions: NumberConventions,
}

impl LocaleFormatter {
    /// Creates a formatter for `locale`. Unknown locales format as `en_US`.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            conventions: locale.conventions(),
        }
    }
}

impl Default for LocaleFormatter {
    fn default() -> Self {
        Self::new(Locale::en_us())
    }
}

impl CurrencyFormatter for LocaleFormatter {
    fn currency(&self) -> Currency {
        self.conventions.currency
    }

    fn format_money(&self, money: &Money) -> String {
        render(&self.conventions, money)
    }
}

/// Formats with whatever locale the host has active at call time.
///
/// The locale is re-read on every call, so a locale change between two
/// calls is picked up by the second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostFormatter;

impl CurrencyFormatter for HostFormatter {
    fn currency(&self) -> Currency {
        Locale::from_host().conventions().currency
    }

    fn format_money(&self, money: &Money) -> String {
        LocaleFormatter::new(Locale::from_host()).format_money(money)
    }

    fn format(&self, amount: Decimal) -> String {
        LocaleFormatter::new(Locale::from_host()).format(amount)
    }
}

fn render(conventions: &NumberConventions, money: &Money) -> String {
    let digits = money.currency.fraction_digits();
    let rounded = Money::new(
        money
            .amount
            .round_dp_with_strategy(digits, RoundingStrategy::MidpointNearestEven),
        money.currency,
    );

    let plain = format!("{:.*}", digits as usize, rounded.amount.abs());
    let (int_digits, frac_digits) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

    let mut number = group_thousands(int_digits, conventions.grouping_separator);
    if !frac_digits.is_empty() {
        number.push(conventions.decimal_separator);
        number.push_str(frac_digits);
    }

    let symbol = money.currency.symbol();
    let body = match conventions.symbol_position {
        SymbolPosition::Prefix => format!("{symbol}{number}"),
        SymbolPosition::Suffix(separator) => format!("{number}{separator}{symbol}"),
    };

    // -0.001 rounds to zero and prints unsigned
    if rounded.is_negative() {
        format!("-{body}")
    } else {
        body
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
#[path = "currency_tests.rs"]
mod tests;
