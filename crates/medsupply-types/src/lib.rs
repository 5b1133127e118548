//! Shared type definitions for the MedSupply dashboard.
//!
//! This crate is the single source of truth for every record and KPI shape
//! used across the workspace. Types flow downstream to `TypeScript` via
//! `ts-rs` for the dashboard frontend.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for every record kind
//! - [`enums`] -- Branches, classifications, statuses, categories
//! - [`structs`] -- Entity records (customers, suppliers, inventory, ...)
//! - [`kpis`] -- Derived KPI records (branch KPIs, overview, classification metrics)

pub mod enums;
pub mod ids;
pub mod kpis;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{
    Branch, Classification, CustomerType, Department, EmployeeStatus, ExpenseCategory,
    InvoiceStatus, OrderStatus, PerformanceTier, ProductCategory, StockStatus, SupplierStatus,
};
pub use ids::{
    CustomerId, EmployeeId, ExpenseId, InventoryItemId, InvoiceId, SalesOrderId, SupplierId,
};
pub use kpis::{
    BranchKpis, CategoryTotal, ClassificationMetrics, CustomerSummary, DashboardOverview,
    MonthlyTotal,
};
pub use structs::{Customer, Employee, Expense, InventoryItem, Invoice, SalesOrder, Supplier};
