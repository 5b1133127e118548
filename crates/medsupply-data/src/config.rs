//! Seed-size configuration.
//!
//! Mirrors the `seed` section of `medsupply-config.yaml`. Every field has a
//! named default so a partial section (or none at all) is valid.

use chrono::NaiveDate;
use serde::Deserialize;

/// How many records of each kind to generate, and the "today" they are
/// generated relative to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedConfig {
    /// Number of customers.
    #[serde(default = "default_customers")]
    pub customers: usize,

    /// Number of suppliers.
    #[serde(default = "default_suppliers")]
    pub suppliers: usize,

    /// Number of inventory items.
    #[serde(default = "default_inventory_items")]
    pub inventory_items: usize,

    /// Number of sales orders.
    #[serde(default = "default_sales_orders")]
    pub sales_orders: usize,

    /// Number of invoices.
    #[serde(default = "default_invoices")]
    pub invoices: usize,

    /// Number of expense entries.
    #[serde(default = "default_expenses")]
    pub expenses: usize,

    /// Number of employees.
    #[serde(default = "default_employees")]
    pub employees: usize,

    /// Date all generated dates are relative to.
    #[serde(default = "default_reference_date")]
    pub reference_date: NaiveDate,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            customers: default_customers(),
            suppliers: default_suppliers(),
            inventory_items: default_inventory_items(),
            sales_orders: default_sales_orders(),
            invoices: default_invoices(),
            expenses: default_expenses(),
            employees: default_employees(),
            reference_date: default_reference_date(),
        }
    }
}

/// Fallback when `2024-12-31` cannot be constructed (it always can).
pub const REFERENCE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2024, 12, 31) {
    Some(date) => date,
    None => NaiveDate::MIN,
};

const fn default_customers() -> usize {
    120
}

const fn default_suppliers() -> usize {
    40
}

const fn default_inventory_items() -> usize {
    200
}

const fn default_sales_orders() -> usize {
    300
}

const fn default_invoices() -> usize {
    250
}

const fn default_expenses() -> usize {
    150
}

const fn default_employees() -> usize {
    80
}

const fn default_reference_date() -> NaiveDate {
    REFERENCE_DATE
}
