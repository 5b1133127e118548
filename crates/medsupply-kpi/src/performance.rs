//! Net-margin performance tiers.

use rust_decimal::Decimal;

use medsupply_types::PerformanceTier;

/// Lower bound (inclusive) of [`PerformanceTier::Excellent`].
pub const EXCELLENT_THRESHOLD: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Lower bound (inclusive) of [`PerformanceTier::Good`].
pub const GOOD_THRESHOLD: Decimal = Decimal::TEN;

/// Map a net profit percentage to its tier.
///
/// `>= 20` Excellent, `>= 10` Good, `>= 0` Average, otherwise Low.
pub fn performance_tier(net_profit_pct: Decimal) -> PerformanceTier {
    if net_profit_pct >= EXCELLENT_THRESHOLD {
        PerformanceTier::Excellent
    } else if net_profit_pct >= GOOD_THRESHOLD {
        PerformanceTier::Good
    } else if net_profit_pct >= Decimal::ZERO {
        PerformanceTier::Average
    } else {
        PerformanceTier::Low
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn boundaries_are_exact() {
        assert_eq!(performance_tier(dec!(20.0)), PerformanceTier::Excellent);
        assert_eq!(performance_tier(dec!(19.9)), PerformanceTier::Good);
        assert_eq!(performance_tier(dec!(10.0)), PerformanceTier::Good);
        assert_eq!(performance_tier(dec!(9.9)), PerformanceTier::Average);
        assert_eq!(performance_tier(dec!(0.0)), PerformanceTier::Average);
        assert_eq!(performance_tier(dec!(-0.1)), PerformanceTier::Low);
    }

    #[test]
    fn tier_labels_are_arabic() {
        assert_eq!(performance_tier(dec!(55)).label(), "ممتاز");
        assert_eq!(performance_tier(dec!(12)).label(), "جيد");
        assert_eq!(performance_tier(dec!(3)).label(), "متوسط");
        assert_eq!(performance_tier(dec!(-40)).label(), "منخفض");
    }
}
