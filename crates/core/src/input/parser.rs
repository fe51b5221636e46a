//! Text-to-decimal parsing with a zero default.
//!
//! Input comes straight from a text field on every keystroke, so partial
//! and malformed text is normal. Anything that is not a plain decimal
//! number reads as zero; there is no error path.

use rust_decimal::Decimal;
use tracing::trace;

/// Most significant digits kept; `Decimal` holds 28 without loss.
const MAX_SIGNIFICANT_DIGITS: usize = 28;
/// Largest scale `Decimal` supports.
const MAX_SCALE: u64 = 28;

/// Parses `raw` as a decimal number, returning zero if it is not one.
///
/// Accepts an optional sign, digits with an optional decimal point, and an
/// optional `e`/`E` exponent. Leading and trailing ASCII whitespace or
/// control characters are ignored. Grouping separators, decimal commas,
/// `NaN` and `Infinity` read as zero.
///
/// Well-formed numbers beyond the `Decimal` range saturate to
/// `Decimal::MAX`/`Decimal::MIN`; digits past the 28th significant one are
/// truncated, and values too small to represent read as zero.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use tiptime_core::input::parse_amount;
///
/// assert_eq!(parse_amount("12.5"), dec!(12.5));
/// assert_eq!(parse_amount("abc"), dec!(0));
/// assert_eq!(parse_amount("1e29"), Decimal::MAX);
/// ```
#[must_use]
pub fn parse_amount(raw: &str) -> Decimal {
    if let Some(value) = parse_decimal(raw) {
        value
    } else {
        trace!(input = raw, "unparseable number, using zero");
        Decimal::ZERO
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let text = raw.trim_matches(|c: char| c <= ' ');

    let (negative, unsigned) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(idx) => (&unsigned[..idx], Some(&unsigned[idx + 1..])),
        None => (unsigned, None),
    };

    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !is_digits(int_part) || !is_digits(frac_part) {
        return None;
    }

    let exponent = match exponent {
        Some(text) => parse_exponent(text)?,
        None => 0,
    };

    // value = significant * 10^power
    let digits = format!("{int_part}{frac_part}");
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Some(Decimal::ZERO);
    }
    let kept = &significant[..significant.len().min(MAX_SIGNIFICANT_DIGITS)];
    let power = exponent
        .saturating_sub(digit_count(frac_part))
        .saturating_add(digit_count(&significant[kept.len()..]));

    let magnitude = match scale(kept.parse().ok()?, power) {
        Some(magnitude) => magnitude,
        None if negative => return Some(Decimal::MIN),
        None => return Some(Decimal::MAX),
    };

    if negative && !magnitude.is_zero() {
        Some(-magnitude)
    } else {
        Some(magnitude)
    }
}

fn is_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

fn digit_count(text: &str) -> i64 {
    i64::try_from(text.len()).unwrap_or(i64::MAX)
}

/// Parses an exponent; one too long for `i64` pins to the matching extreme.
fn parse_exponent(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() || !is_digits(digits) {
        return None;
    }
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Builds `mantissa * 10^power`, or `None` if it overflows.
fn scale(mut mantissa: i128, power: i64) -> Option<Decimal> {
    if power >= 0 {
        let mut value = Decimal::try_from_i128_with_scale(mantissa, 0).ok()?;
        for _ in 0..power {
            value = value.checked_mul(Decimal::TEN)?;
        }
        return Some(value);
    }

    let mut scale = power.unsigned_abs();
    while scale > MAX_SCALE {
        mantissa /= 10;
        scale -= 1;
        if mantissa == 0 {
            return Some(Decimal::ZERO);
        }
    }
    let scale = u32::try_from(scale).ok()?;
    Decimal::try_from_i128_with_scale(mantissa, scale).ok()
}
