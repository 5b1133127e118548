//! Derived KPI records served to the dashboard.
//!
//! Nothing here is persisted. Every value is recomputed from the entity
//! arrays on each read by `medsupply-kpi`.
//!
//! [`BranchKpis`] is serialized in camelCase because the dashboard matches
//! its keys by exact string.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Branch, Classification, ExpenseCategory, PerformanceTier};
use crate::ids::CustomerId;

/// Per-branch KPI summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct BranchKpis {
    /// The branch these figures belong to.
    pub branch: Branch,
    /// Revenue from non-cancelled orders.
    #[ts(as = "String")]
    pub total_revenue: Decimal,
    /// Expenses allocated to this branch by revenue share.
    #[ts(as = "String")]
    pub total_expenses: Decimal,
    /// `total_revenue - total_expenses`.
    #[ts(as = "String")]
    pub net_profit: Decimal,
    /// Net margin in percent, one decimal place.
    #[ts(as = "String")]
    pub net_profit_pct: Decimal,
    /// Number of customers served by the branch.
    pub clients_count: u32,
    /// Stock on hand at cost.
    #[ts(as = "String")]
    pub inventory_value: Decimal,
    /// Tier derived from `net_profit_pct`.
    pub performance: PerformanceTier,
}

/// Aggregate figures for one customer classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ClassificationMetrics {
    /// The classification.
    pub classification: Classification,
    /// Customers carrying this classification.
    pub customers_count: u32,
    /// Non-cancelled orders carrying this classification.
    pub orders_count: u32,
    /// Revenue from those orders.
    #[ts(as = "String")]
    pub revenue: Decimal,
    /// `revenue / orders_count`, rounded to 2 decimals; 0 with no orders.
    #[ts(as = "String")]
    pub average_order_value: Decimal,
    /// Share of total revenue in percent, one decimal place.
    #[ts(as = "String")]
    pub revenue_share_pct: Decimal,
}

/// A money amount for one calendar month (`YYYY-MM`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MonthlyTotal {
    /// Month key, e.g. `2024-03`.
    pub month: String,
    /// Summed amount.
    #[ts(as = "String")]
    pub amount: Decimal,
}

/// A money amount for one expense category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CategoryTotal {
    /// Expense category.
    pub category: ExpenseCategory,
    /// Summed amount.
    #[ts(as = "String")]
    pub amount: Decimal,
}

/// Short customer line for "top customers" widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CustomerSummary {
    /// Customer id.
    pub id: CustomerId,
    /// Customer name.
    pub name: String,
    /// Servicing branch.
    pub branch: Branch,
    /// Classification tag.
    pub classification: Classification,
    /// Lifetime purchases.
    #[ts(as = "String")]
    pub total_purchases: Decimal,
}

/// Company-wide headline figures for the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DashboardOverview {
    /// Revenue from non-cancelled orders.
    #[ts(as = "String")]
    pub total_revenue: Decimal,
    /// Sum of all expenses.
    #[ts(as = "String")]
    pub total_expenses: Decimal,
    /// `total_revenue - total_expenses`.
    #[ts(as = "String")]
    pub net_profit: Decimal,
    /// Net margin in percent, one decimal place.
    #[ts(as = "String")]
    pub net_profit_pct: Decimal,
    /// Unpaid invoice balances.
    #[ts(as = "String")]
    pub outstanding_receivables: Decimal,
    /// Invoices in `Overdue` status.
    pub overdue_invoices: u32,
    /// Items at or below reorder level with stock left.
    pub low_stock_items: u32,
    /// Items with zero stock.
    pub out_of_stock_items: u32,
    /// Employees in `Active` status.
    pub active_employees: u32,
    /// Monthly salaries of non-terminated employees.
    #[ts(as = "String")]
    pub monthly_payroll: Decimal,
    /// Expenses per category, in category order, zero categories included.
    pub expenses_by_category: Vec<CategoryTotal>,
    /// Revenue per month, ascending.
    pub revenue_by_month: Vec<MonthlyTotal>,
    /// Largest customers by lifetime purchases.
    pub top_customers: Vec<CustomerSummary>,
}
