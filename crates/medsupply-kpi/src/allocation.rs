//! Proportional allocation of an un-attributed total across branches.
//!
//! Expenses are recorded company-wide. To give each branch a profit figure
//! the expense total is split by each branch's share of a reference
//! distribution (revenue):
//!
//! ```text
//! allocated[b] = round(total * reference[b] / sum(reference))
//! ```
//!
//! When the reference sums to zero the total is split evenly:
//! `round(total / 4)` per branch.
//!
//! # Rounding drift
//!
//! Each branch is rounded independently and the parts are never
//! reconciled, so `sum(allocated)` may differ from `total` by up to one
//! unit per branch. [`allocation_drift`] reports the difference so the
//! dashboard can show it; nothing corrects it.

use rust_decimal::Decimal;

use medsupply_types::Branch;

use crate::aggregate::BranchTotals;
use crate::rounding::round_half_up;

/// Split `total` across branches in proportion to `reference`.
///
/// Always returns a value for every branch.
pub fn allocate_proportionally(reference: &BranchTotals, total: Decimal) -> BranchTotals {
    let reference_total = reference.total();

    if reference_total.is_zero() {
        let even = Decimal::from(Branch::COUNT);
        let share = total
            .checked_div(even)
            .map_or(Decimal::ZERO, round_half_up);
        return BranchTotals::from_fn(|_| share);
    }

    BranchTotals::from_fn(|branch| {
        total
            .checked_mul(reference.get(branch))
            .and_then(|weighted| weighted.checked_div(reference_total))
            .map_or(Decimal::ZERO, round_half_up)
    })
}

/// `sum(allocated) - total`: positive when rounding over-allocated.
pub fn allocation_drift(allocated: &BranchTotals, total: Decimal) -> Decimal {
    allocated.total().saturating_sub(total)
}
