//! The tip formula and its formatted result.
//!
//! `tip = tip_percent / 100 * amount`, optionally raised to the next whole
//! currency unit. Nothing here validates input: negative amounts produce
//! negative tips, and no argument makes the computation fail.

use rust_decimal::Decimal;

use crate::format::{CurrencyFormatter, HostFormatter};

/// Tip percentage used when the caller does not supply one.
pub const DEFAULT_TIP_PERCENT: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// Computes the numeric tip.
///
/// With `round_up` the tip is replaced by its ceiling before anything else
/// sees it. A product too large for `Decimal` saturates to `Decimal::MAX`
/// or `Decimal::MIN` by sign.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tiptime_core::tip::calculate_tip;
///
/// assert_eq!(calculate_tip(dec!(59.50), dec!(18), false), dec!(10.71));
/// assert_eq!(calculate_tip(dec!(59.50), dec!(18), true), dec!(11));
/// ```
#[must_use]
pub fn calculate_tip(amount: Decimal, tip_percent: Decimal, round_up: bool) -> Decimal {
    let rate = tip_percent / Decimal::ONE_HUNDRED;
    let tip = rate.checked_mul(amount).unwrap_or_else(|| {
        if rate.is_sign_negative() == amount.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    });

    if round_up { tip.ceil() } else { tip }
}

/// Computes the tip and formats it with `formatter`.
///
/// `tip_percent` defaults to [`DEFAULT_TIP_PERCENT`] when `None`. Rounding
/// happens before formatting.
pub fn compute_tip<F>(
    amount: Decimal,
    tip_percent: Option<Decimal>,
    round_up: bool,
    formatter: &F,
) -> String
where
    F: CurrencyFormatter + ?Sized,
{
    let tip_percent = tip_percent.unwrap_or(DEFAULT_TIP_PERCENT);
    formatter.format(calculate_tip(amount, tip_percent, round_up))
}

/// Like [`compute_tip`], formatted for the host locale active at call time.
pub fn compute_tip_for_host(amount: Decimal, tip_percent: Option<Decimal>, round_up: bool) -> String {
    compute_tip(amount, tip_percent, round_up, &HostFormatter)
}
