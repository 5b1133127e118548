//! Fields derived from a record's identity.
//!
//! Each function hashes an identifying string, so the same code, number or
//! name always yields the same value. The generators use them for seeded
//! records and the stores call them again on every create and update.

use medsupply_types::Branch;

use crate::catalog::{ACCOUNT_MANAGERS, branch_managers};
use crate::hash::{pick, score_in_range};

/// Account manager for the customer with `code`.
pub fn account_manager(code: &str) -> String {
    pick(code, ACCOUNT_MANAGERS)
        .copied()
        .unwrap_or("خالد الحربي")
        .to_owned()
}

/// Appraisal score (60 to 100) for the employee with `employee_number`.
pub fn appraisal_score(employee_number: &str) -> u8 {
    u8::try_from(score_in_range(employee_number, 60, 100)).unwrap_or(60)
}

/// Direct manager for the employee called `name` at `branch`.
pub fn direct_manager(name: &str, branch: Branch) -> String {
    pick(name, branch_managers(branch))
        .copied()
        .unwrap_or("عبدالله العتيبي")
        .to_owned()
}

/// Rating (1 to 5) for the supplier called `name`.
///
/// A trailing branch qualifier such as ` (Jeddah)` is ignored, so every
/// branch of the same company shares one rating.
pub fn supplier_rating(name: &str) -> u8 {
    u8::try_from(score_in_range(company_name(name), 1, 5)).unwrap_or(3)
}

fn company_name(name: &str) -> &str {
    Branch::ALL
        .iter()
        .find_map(|branch| {
            name.strip_suffix(')')?
                .strip_suffix(branch.english_name())?
                .strip_suffix(" (")
        })
        .unwrap_or(name)
}
