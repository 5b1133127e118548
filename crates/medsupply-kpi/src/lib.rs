//! Branch aggregation, expense allocation and KPI composition for the
//! MedSupply dashboard.
//!
//! Every function here is pure and infallible: empty inputs produce zeros,
//! divisions by zero produce zero, and [`Decimal`] arithmetic saturates
//! instead of panicking. Results are recomputed on every call.
//!
//! # Modules
//!
//! - [`aggregate`] -- [`BranchMap`], [`sum_by_branch`], [`count_by_branch`].
//! - [`allocation`] -- [`allocate_proportionally`] and the unreconciled
//!   [`allocation_drift`].
//! - [`composer`] -- [`compose_branch_kpis`] and [`branch_kpi_report`].
//! - [`performance`] -- net-margin tiers.
//! - [`classification`] -- per-classification revenue metrics.
//! - [`overview`] -- landing-page headline figures.
//! - [`rounding`] -- half-toward-positive-infinity rounding.
//!
//! # Usage
//!
//! ```
//! use medsupply_kpi::{BranchTotals, allocate_proportionally};
//! use medsupply_types::Branch;
//! use rust_decimal::Decimal;
//!
//! let revenue = BranchTotals::from_fn(|b| match b {
//!     Branch::Riyadh => Decimal::new(400_000, 0),
//!     Branch::Jeddah => Decimal::new(300_000, 0),
//!     Branch::Dammam => Decimal::new(200_000, 0),
//!     Branch::Mecca => Decimal::new(100_000, 0),
//! });
//! let expenses = allocate_proportionally(&revenue, Decimal::new(500_000, 0));
//! assert_eq!(expenses.get(Branch::Jeddah), Decimal::new(150_000, 0));
//! ```
//!
//! [`Decimal`]: rust_decimal::Decimal

pub mod aggregate;
pub mod allocation;
pub mod classification;
pub mod composer;
pub mod overview;
pub mod performance;
pub mod rounding;
pub mod view;

// Re-export primary items at crate root.
pub use aggregate::{BranchCounts, BranchMap, BranchTotals, count_by_branch, sum_by_branch};
pub use allocation::{allocate_proportionally, allocation_drift};
pub use classification::classification_metrics;
pub use composer::{BranchKpiReport, KpiInputs, branch_kpi_report, compose_branch_kpis};
pub use overview::dashboard_overview;
pub use performance::performance_tier;
pub use view::DataView;
