//! Grouping entity arrays by branch.
//!
//! Every aggregation returns a [`BranchMap`] that always holds all four
//! branches. A branch with no records reads as zero; a key is never
//! missing, because the dashboard looks branches up by exact name.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use medsupply_types::Branch;

/// A complete mapping from every [`Branch`] to a value.
///
/// Serializes as a JSON object keyed by the Arabic branch names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BranchMap<T> {
    values: BTreeMap<Branch, T>,
}

/// Summed money per branch.
pub type BranchTotals = BranchMap<Decimal>;

/// Record counts per branch.
pub type BranchCounts = BranchMap<u32>;

impl<T: Copy + Default> BranchMap<T> {
    /// A map with every branch set to `T::default()`.
    pub fn zeroed() -> Self {
        Self {
            values: Branch::ALL.iter().map(|b| (*b, T::default())).collect(),
        }
    }

    /// Build a map by evaluating `f` for every branch.
    pub fn from_fn(mut f: impl FnMut(Branch) -> T) -> Self {
        Self {
            values: Branch::ALL.iter().map(|b| (*b, f(*b))).collect(),
        }
    }

    /// Value for `branch`.
    pub fn get(&self, branch: Branch) -> T {
        self.values.get(&branch).copied().unwrap_or_default()
    }

    /// Overwrite the value for `branch`.
    pub fn set(&mut self, branch: Branch, value: T) {
        self.values.insert(branch, value);
    }

    /// Iterate `(branch, value)` in [`Branch::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Branch, T)> + '_ {
        self.values.iter().map(|(b, v)| (*b, *v))
    }

    /// Number of keys. Always [`Branch::COUNT`].
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl BranchMap<Decimal> {
    /// Sum across all branches.
    pub fn total(&self) -> Decimal {
        self.values
            .values()
            .fold(Decimal::ZERO, |acc, v| acc.saturating_add(*v))
    }
}

impl BranchMap<u32> {
    /// Sum across all branches.
    pub fn total(&self) -> u32 {
        self.values
            .values()
            .fold(0_u32, |acc, v| acc.saturating_add(*v))
    }
}

/// Group `items` by branch and sum a numeric field.
///
/// `branch_of` returns `None` for records that should be skipped (for
/// example cancelled orders). The result always covers every branch.
pub fn sum_by_branch<T>(
    items: &[T],
    branch_of: impl Fn(&T) -> Option<Branch>,
    value_of: impl Fn(&T) -> Decimal,
) -> BranchTotals {
    let mut totals = BranchTotals::zeroed();
    for item in items {
        if let Some(branch) = branch_of(item) {
            let next = totals.get(branch).saturating_add(value_of(item));
            totals.set(branch, next);
        }
    }
    totals
}

/// Group `items` by branch and count them.
pub fn count_by_branch<T>(items: &[T], branch_of: impl Fn(&T) -> Option<Branch>) -> BranchCounts {
    let mut counts = BranchCounts::zeroed();
    for item in items {
        if let Some(branch) = branch_of(item) {
            counts.set(branch, counts.get(branch).saturating_add(1));
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    struct Row {
        branch: Branch,
        amount: Decimal,
    }

    #[test]
    fn empty_input_has_all_branches_at_zero() {
        let rows: Vec<Row> = Vec::new();
        let totals = sum_by_branch(&rows, |r| Some(r.branch), |r| r.amount);
        assert_eq!(totals.len(), Branch::COUNT);
        for branch in Branch::ALL {
            assert_eq!(totals.get(*branch), Decimal::ZERO);
        }
        let counts = count_by_branch(&rows, |r| Some(r.branch));
        assert_eq!(counts.len(), Branch::COUNT);
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn zeroed_map_is_never_empty() {
        let totals = BranchTotals::zeroed();
        assert_eq!(totals.len(), Branch::COUNT);
        assert!(!totals.is_empty());
        assert_eq!(totals.iter().count(), totals.len());
    }

    #[test]
    fn sums_group_by_branch() {
        let rows = vec![
            Row { branch: Branch::Riyadh, amount: dec!(100.50) },
            Row { branch: Branch::Riyadh, amount: dec!(49.50) },
            Row { branch: Branch::Mecca, amount: dec!(20) },
        ];
        let totals = sum_by_branch(&rows, |r| Some(r.branch), |r| r.amount);
        assert_eq!(totals.get(Branch::Riyadh), dec!(150));
        assert_eq!(totals.get(Branch::Jeddah), Decimal::ZERO);
        assert_eq!(totals.get(Branch::Mecca), dec!(20));
        assert_eq!(totals.total(), dec!(170));
    }

    #[test]
    fn skipped_rows_do_not_count() {
        let rows = vec![
            Row { branch: Branch::Dammam, amount: dec!(10) },
            Row { branch: Branch::Dammam, amount: dec!(-1) },
        ];
        let counts = count_by_branch(&rows, |r| (r.amount > Decimal::ZERO).then_some(r.branch));
        assert_eq!(counts.get(Branch::Dammam), 1);
    }

    #[test]
    fn serializes_with_arabic_keys() {
        let totals = BranchTotals::from_fn(|b| if b == Branch::Jeddah { dec!(5) } else { Decimal::ZERO });
        let json = serde_json::to_value(&totals).unwrap_or_default();
        assert_eq!(json["جدة"], "5");
        assert_eq!(json["الرياض"], "0");
    }
}
