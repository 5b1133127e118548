//! Deterministic generators for every entity array.
//!
//! Each generator is a pure function of the [`SeedConfig`] (and of the
//! arrays it references). Record `i` is built from formulas over `i` via
//! [`mix`], so the same config always yields identical arrays.
//!
//! Generation order matters: inventory references suppliers, orders
//! reference customers, invoices reference orders.
//!
//! [`SeedConfig`]: crate::config::SeedConfig
//! [`mix`]: crate::hash::mix

mod customers;
mod employees;
mod expenses;
mod inventory;
mod invoices;
mod orders;
mod suppliers;

pub use customers::customers;
pub use employees::employees;
pub use expenses::expenses;
pub use inventory::inventory;
pub use invoices::invoices;
pub use orders::orders;
pub use suppliers::suppliers;

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use crate::catalog::{FAMILY_NAMES, FIRST_NAMES};
use crate::hash::mix_pick;

/// Seed index as `u64`.
fn seed_index(index: usize) -> u64 {
    u64::try_from(index).unwrap_or(u64::MAX)
}

/// `reference - days`, or `reference` if that underflows the calendar.
fn days_before(reference: NaiveDate, days: u64) -> NaiveDate {
    reference
        .checked_sub_days(Days::new(days))
        .unwrap_or(reference)
}

/// `date + days`, or `date` if that overflows the calendar.
fn days_after(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(date)
}

/// Whole riyals as a [`Decimal`].
fn riyals(amount: u64) -> Decimal {
    Decimal::from(amount)
}

/// A two-part Arabic person name for `(index, salt)`.
fn person_name(index: u64, salt: u64) -> String {
    let first = mix_pick(index, salt, FIRST_NAMES).unwrap_or("محمد");
    let family = mix_pick(index, salt.wrapping_add(1), FAMILY_NAMES).unwrap_or("العتيبي");
    format!("{first} {family}")
}

/// Saudi mobile number for `(index, salt)`.
fn phone(index: u64, salt: u64) -> String {
    let digits = crate::hash::mix_range(index, salt, 10_000_000, 99_999_999);
    format!("05{digits}")
}
