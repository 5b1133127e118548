//! Rounding helpers shared by every KPI computation.
//!
//! The dashboard has always rounded with "half toward positive infinity"
//! (`2.5 -> 3`, `-2.5 -> -2`). [`round_half_up`] reproduces that exactly on
//! [`Decimal`] so displayed figures never shift by one.

use rust_decimal::Decimal;

/// `0.5` as a [`Decimal`].
const HALF: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Round to the nearest integer, ties toward positive infinity.
pub fn round_half_up(value: Decimal) -> Decimal {
    value.saturating_add(HALF).floor()
}

/// Round to `dp` decimal places, ties toward positive infinity.
pub fn round_half_up_dp(value: Decimal, dp: u32) -> Decimal {
    let scale = Decimal::from(10_u64.saturating_pow(dp));
    match value.checked_mul(scale) {
        Some(scaled) => round_half_up(scaled)
            .checked_div(scale)
            .unwrap_or(Decimal::ZERO),
        None => value.round_dp(dp),
    }
}

/// `numerator / denominator` as a percentage with one decimal place.
///
/// Computes `round(numerator / denominator * 1000) / 10`. Returns zero
/// when the denominator is zero so callers never see a division error.
pub fn percent_one_decimal(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    let per_mille = numerator
        .checked_mul(Decimal::ONE_THOUSAND)
        .and_then(|scaled| scaled.checked_div(denominator));
    match per_mille {
        Some(value) => round_half_up(value)
            .checked_div(Decimal::TEN)
            .unwrap_or(Decimal::ZERO),
        None => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn ties_round_toward_positive_infinity() {
        assert_eq!(round_half_up(dec!(2.5)), dec!(3));
        assert_eq!(round_half_up(dec!(-2.5)), dec!(-2));
        assert_eq!(round_half_up(dec!(2.4999)), dec!(2));
        assert_eq!(round_half_up(dec!(-2.51)), dec!(-3));
    }

    #[test]
    fn round_to_places() {
        assert_eq!(round_half_up_dp(dec!(1.005), 2), dec!(1.01));
        assert_eq!(round_half_up_dp(dec!(1234.5678), 2), dec!(1234.57));
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(percent_one_decimal(dec!(1), dec!(3)), dec!(33.3));
        assert_eq!(percent_one_decimal(dec!(2), dec!(3)), dec!(66.7));
        assert_eq!(percent_one_decimal(dec!(-1), dec!(8)), dec!(-12.5));
    }

    #[test]
    fn percent_of_zero_is_zero() {
        assert_eq!(percent_one_decimal(dec!(500), Decimal::ZERO), Decimal::ZERO);
    }
}
