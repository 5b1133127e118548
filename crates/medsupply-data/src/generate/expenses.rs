use medsupply_types::{Expense, ExpenseCategory, ExpenseId};

use super::{days_before, riyals, seed_index};
use crate::catalog::expense_profile;
use crate::config::SeedConfig;
use crate::hash::mix_range;

/// Category by position in a repeating block of ten entries. Salaries and
/// rent dominate, as they do on the real books.
const fn category_for(index: u64) -> ExpenseCategory {
    match index % 10 {
        0..=2 => ExpenseCategory::Salaries,
        3 | 4 => ExpenseCategory::Rent,
        5 => ExpenseCategory::Utilities,
        6 => ExpenseCategory::Logistics,
        7 => ExpenseCategory::Marketing,
        8 => ExpenseCategory::Maintenance,
        _ => ExpenseCategory::Other,
    }
}

/// Generate `config.expenses` company-level expenses.
pub fn expenses(config: &SeedConfig) -> Vec<Expense> {
    (0..config.expenses)
        .map(|i| {
            let n = seed_index(i);
            let category = category_for(n);
            let (description, min, max) = expense_profile(category);
            Expense {
                id: ExpenseId::seeded(n),
                reference: format!("EXP-{:04}", n.saturating_add(1)),
                category,
                description: description.to_owned(),
                amount: riyals(mix_range(n, 61, min, max)),
                date: days_before(config.reference_date, mix_range(n, 62, 0, 364)),
            }
        })
        .collect()
}
