//! Currency rounding, parsing, and rendering
//!
//! Floating-point sums of independently rounded parts drift from the rounded
//! total, so every stored and displayed amount passes through the 2-decimal
//! rounding here and the allocation layer reconstructs totals exactly.

use num_format::{Buffer, Locale};
use paysplit_types::AmountParseError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Fraction digits for monetary amounts
pub const CURRENCY_DP: u32 = 2;

/// Fraction digits for percentage values
pub const PERCENT_DP: u32 = 2;

/// Round a monetary amount to 2 decimal places, midpoint away from zero
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a percentage to 2 decimal places, midpoint away from zero
pub fn round_percent(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(PERCENT_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Parse a decimal amount, rejecting anything that is not a plain number
pub fn parse_amount_strict(input: &str) -> Result<Decimal, AmountParseError> {
    Decimal::from_str(input.trim()).map_err(|_| AmountParseError::InvalidDecimal {
        input: input.to_string(),
    })
}

/// Parse free-form amount input the way the split UI sanitizes it: strip
/// everything that is not a digit or decimal point, fall back to zero when
/// nothing parseable remains
pub fn parse_amount_lenient(input: &str) -> Decimal {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
}

/// Render an amount as `<symbol><grouped units>.<2 dp>`
///
/// Negative amounts keep the symbol first: `£-20.00`.
pub fn format_currency(value: Decimal, symbol: &str) -> String {
    let rounded = round_currency(value);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let magnitude = rounded.abs();

    let units = magnitude.trunc().to_i128().unwrap_or(0);
    let cents = (magnitude.fract() * Decimal::ONE_HUNDRED)
        .to_u32()
        .unwrap_or(0);

    let mut grouped = Buffer::default();
    grouped.write_formatted(&units, &Locale::en);

    let sign = if negative { "-" } else { "" };
    format!("{symbol}{sign}{}.{cents:02}", grouped.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rounds_midpoint_away_from_zero() {
        assert_eq!(round_currency(dec!(21.4978)), dec!(21.50));
        assert_eq!(round_currency(dec!(5.275)), dec!(5.28));
        assert_eq!(round_currency(dec!(-5.275)), dec!(-5.28));
        assert_eq!(round_currency(dec!(10)), dec!(10));
    }

    #[test]
    fn strict_parse_accepts_plain_decimals() {
        assert_eq!(parse_amount_strict("64.50").unwrap(), dec!(64.50));
        assert_eq!(parse_amount_strict("  12 ").unwrap(), dec!(12));
    }

    #[test]
    fn strict_parse_rejects_garbage() {
        let err = parse_amount_strict("12.3.4").unwrap_err();
        assert!(matches!(
            err,
            paysplit_types::AmountParseError::InvalidDecimal { .. }
        ));
    }

    #[test]
    fn lenient_parse_strips_and_coerces() {
        assert_eq!(parse_amount_lenient("£64.50"), dec!(64.50));
        assert_eq!(parse_amount_lenient("1,234.56"), dec!(1234.56));
        assert_eq!(parse_amount_lenient("abc"), Decimal::ZERO);
        assert_eq!(parse_amount_lenient(""), Decimal::ZERO);
        assert_eq!(parse_amount_lenient("12.3.4"), Decimal::ZERO);
    }

    #[test]
    fn formats_with_grouping_and_two_digits() {
        assert_eq!(format_currency(dec!(64.5), "£"), "£64.50");
        assert_eq!(format_currency(dec!(1234567.891), "£"), "£1,234,567.89");
        assert_eq!(format_currency(Decimal::ZERO, "£"), "£0.00");
    }

    #[test]
    fn formats_negative_after_symbol() {
        assert_eq!(format_currency(dec!(-20), "£"), "£-20.00");
        assert_eq!(format_currency(dec!(-0.5), "£"), "£-0.50");
    }
}
