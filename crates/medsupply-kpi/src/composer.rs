//! Per-branch KPI composition.
//!
//! Combines the branch aggregator and the proportional allocator into one
//! [`BranchKpis`] record per branch:
//!
//! 1. Revenue per branch: sum of `total` over non-cancelled orders.
//! 2. Clients per branch: customer count.
//! 3. Inventory value per branch: sum of `current_stock * unit_cost`.
//! 4. Expenses per branch: company expense total allocated by revenue share.
//! 5. `net_profit = revenue - expenses`,
//!    `net_profit_pct = round(net_profit / revenue * 1000) / 10` (0 when
//!    revenue is 0), tier from [`performance_tier`].
//!
//! The result is recomputed on every call; nothing is cached.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use medsupply_types::{Branch, BranchKpis};

use crate::aggregate::{BranchCounts, BranchTotals, count_by_branch, sum_by_branch};
use crate::allocation::{allocate_proportionally, allocation_drift};
use crate::performance::performance_tier;
use crate::rounding::percent_one_decimal;
use crate::view::DataView;

/// The aggregated inputs the composer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiInputs {
    /// Revenue per branch; also the allocation reference.
    pub revenue: BranchTotals,
    /// Company-wide expense total to allocate.
    pub total_expenses: Decimal,
    /// Customers per branch.
    pub clients: BranchCounts,
    /// Inventory value per branch.
    pub inventory_value: BranchTotals,
}

impl KpiInputs {
    /// Aggregate the inputs from entity arrays.
    pub fn from_view(view: &DataView<'_>) -> Self {
        let revenue = sum_by_branch(
            view.orders,
            |o| o.is_revenue().then_some(o.branch),
            |o| o.total,
        );
        let clients = count_by_branch(view.customers, |c| Some(c.branch));
        let inventory_value =
            sum_by_branch(view.inventory, |i| Some(i.branch), |i| i.stock_value());
        let total_expenses = view
            .expenses
            .iter()
            .fold(Decimal::ZERO, |acc, e| acc.saturating_add(e.amount));

        Self {
            revenue,
            total_expenses,
            clients,
            inventory_value,
        }
    }
}

/// Branch KPIs plus the allocation details behind them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchKpiReport {
    /// One record per branch in [`Branch::ALL`] order.
    pub kpis: Vec<BranchKpis>,
    /// Expenses allocated to each branch.
    pub allocated_expenses: BranchTotals,
    /// `sum(allocated) - total_expenses`, left unreconciled.
    pub allocation_drift: Decimal,
}

/// Compose one [`BranchKpis`] per branch from pre-aggregated inputs.
pub fn compose_branch_kpis(inputs: &KpiInputs) -> Vec<BranchKpis> {
    let allocated = allocate_proportionally(&inputs.revenue, inputs.total_expenses);
    compose_with_allocation(inputs, &allocated)
}

/// Aggregate, allocate and compose in one step.
pub fn branch_kpi_report(view: &DataView<'_>) -> BranchKpiReport {
    let inputs = KpiInputs::from_view(view);
    let allocated = allocate_proportionally(&inputs.revenue, inputs.total_expenses);
    let drift = allocation_drift(&allocated, inputs.total_expenses);
    if !drift.is_zero() {
        debug!(%drift, total_expenses = %inputs.total_expenses, "expense allocation rounding drift");
    }
    BranchKpiReport {
        kpis: compose_with_allocation(&inputs, &allocated),
        allocated_expenses: allocated,
        allocation_drift: drift,
    }
}

fn compose_with_allocation(inputs: &KpiInputs, allocated: &BranchTotals) -> Vec<BranchKpis> {
    Branch::ALL
        .iter()
        .map(|branch| {
            let total_revenue = inputs.revenue.get(*branch);
            let total_expenses = allocated.get(*branch);
            let net_profit = total_revenue.saturating_sub(total_expenses);
            let net_profit_pct = percent_one_decimal(net_profit, total_revenue);
            BranchKpis {
                branch: *branch,
                total_revenue,
                total_expenses,
                net_profit,
                net_profit_pct,
                clients_count: inputs.clients.get(*branch),
                inventory_value: inputs.inventory_value.get(*branch),
                performance: performance_tier(net_profit_pct),
            }
        })
        .collect()
}
