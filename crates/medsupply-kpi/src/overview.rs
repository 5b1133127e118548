//! Company-wide headline figures for the dashboard landing page.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use medsupply_types::{
    CategoryTotal, CustomerSummary, DashboardOverview, EmployeeStatus, ExpenseCategory,
    InvoiceStatus, MonthlyTotal, SalesOrder, StockStatus,
};

use crate::rounding::percent_one_decimal;
use crate::view::DataView;

/// Number of customers listed in [`DashboardOverview::top_customers`].
pub const TOP_CUSTOMERS: usize = 5;

/// Build the [`DashboardOverview`] from entity arrays.
pub fn dashboard_overview(view: &DataView<'_>) -> DashboardOverview {
    let total_revenue = view
        .orders
        .iter()
        .filter(|o| o.is_revenue())
        .fold(Decimal::ZERO, |acc, o| acc.saturating_add(o.total));
    let total_expenses = view
        .expenses
        .iter()
        .fold(Decimal::ZERO, |acc, e| acc.saturating_add(e.amount));
    let net_profit = total_revenue.saturating_sub(total_expenses);

    let outstanding_receivables = view
        .invoices
        .iter()
        .filter(|i| i.status != InvoiceStatus::Paid)
        .fold(Decimal::ZERO, |acc, i| acc.saturating_add(i.outstanding()));

    DashboardOverview {
        total_revenue,
        total_expenses,
        net_profit,
        net_profit_pct: percent_one_decimal(net_profit, total_revenue),
        outstanding_receivables,
        overdue_invoices: count(view.invoices.iter().filter(|i| i.status == InvoiceStatus::Overdue)),
        low_stock_items: count(view.inventory.iter().filter(|i| i.stock_status() == StockStatus::Low)),
        out_of_stock_items: count(
            view.inventory
                .iter()
                .filter(|i| i.stock_status() == StockStatus::OutOfStock),
        ),
        active_employees: count(view.employees.iter().filter(|e| e.status == EmployeeStatus::Active)),
        monthly_payroll: view
            .employees
            .iter()
            .filter(|e| e.status != EmployeeStatus::Terminated)
            .fold(Decimal::ZERO, |acc, e| acc.saturating_add(e.salary)),
        expenses_by_category: expenses_by_category(view),
        revenue_by_month: revenue_by_month(view.orders),
        top_customers: top_customers(view),
    }
}

/// Expense totals for every category, zero categories included.
pub fn expenses_by_category(view: &DataView<'_>) -> Vec<CategoryTotal> {
    let mut totals: BTreeMap<ExpenseCategory, Decimal> = BTreeMap::new();
    for expense in view.expenses {
        let entry = totals.entry(expense.category).or_insert(Decimal::ZERO);
        *entry = entry.saturating_add(expense.amount);
    }
    ExpenseCategory::ALL
        .iter()
        .map(|category| CategoryTotal {
            category: *category,
            amount: totals.get(category).copied().unwrap_or(Decimal::ZERO),
        })
        .collect()
}

/// Revenue from non-cancelled orders per `YYYY-MM`, ascending.
pub fn revenue_by_month(orders: &[SalesOrder]) -> Vec<MonthlyTotal> {
    let mut months: BTreeMap<String, Decimal> = BTreeMap::new();
    for order in orders.iter().filter(|o| o.is_revenue()) {
        let key = order.order_date.format("%Y-%m").to_string();
        let entry = months.entry(key).or_insert(Decimal::ZERO);
        *entry = entry.saturating_add(order.total);
    }
    months
        .into_iter()
        .map(|(month, amount)| MonthlyTotal { month, amount })
        .collect()
}

/// The [`TOP_CUSTOMERS`] largest customers by lifetime purchases.
///
/// Ties break on customer code so the list is stable.
pub fn top_customers(view: &DataView<'_>) -> Vec<CustomerSummary> {
    let mut ranked: Vec<_> = view.customers.iter().collect();
    ranked.sort_by(|a, b| {
        b.total_purchases
            .cmp(&a.total_purchases)
            .then_with(|| a.code.cmp(&b.code))
    });
    ranked
        .into_iter()
        .take(TOP_CUSTOMERS)
        .map(|c| CustomerSummary {
            id: c.id,
            name: c.name.clone(),
            branch: c.branch,
            classification: c.classification,
            total_purchases: c.total_purchases,
        })
        .collect()
}

fn count<I: Iterator>(iter: I) -> u32 {
    u32::try_from(iter.count()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use medsupply_types::{
        Branch, Classification, CustomerId, Expense, ExpenseId, OrderStatus, SalesOrderId,
    };

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    fn order(on: NaiveDate, total: Decimal, status: OrderStatus) -> SalesOrder {
        SalesOrder {
            id: SalesOrderId::new(),
            order_number: String::from("SO"),
            customer_id: CustomerId::new(),
            customer_name: String::from("C"),
            branch: Branch::Dammam,
            order_date: on,
            status,
            classification: Classification::Regular,
            items_count: 1,
            subtotal: total,
            vat: Decimal::ZERO,
            total,
        }
    }

    #[test]
    fn months_are_ascending_and_skip_cancelled() {
        let orders = vec![
            order(date(2024, 3, 5), dec!(10), OrderStatus::Delivered),
            order(date(2024, 1, 9), dec!(5), OrderStatus::Pending),
            order(date(2024, 3, 28), dec!(7), OrderStatus::Shipped),
            order(date(2024, 2, 1), dec!(100), OrderStatus::Cancelled),
        ];
        let months = revenue_by_month(&orders);
        let keys: Vec<&str> = months.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(keys, vec!["2024-01", "2024-03"]);
        assert_eq!(months.last().map(|m| m.amount), Some(dec!(17)));
    }

    #[test]
    fn every_expense_category_is_listed() {
        let expenses = vec![Expense {
            id: ExpenseId::new(),
            reference: String::from("EXP-1"),
            category: ExpenseCategory::Rent,
            description: String::from("Warehouse rent"),
            amount: dec!(1200),
            date: date(2024, 1, 1),
        }];
        let view = DataView {
            expenses: &expenses,
            ..DataView::default()
        };
        let totals = expenses_by_category(&view);
        assert_eq!(totals.len(), ExpenseCategory::ALL.len());
        let rent = totals.iter().find(|t| t.category == ExpenseCategory::Rent);
        assert_eq!(rent.map(|t| t.amount), Some(dec!(1200)));
    }

    #[test]
    fn empty_view_is_all_zero() {
        let overview = dashboard_overview(&DataView::default());
        assert_eq!(overview.total_revenue, Decimal::ZERO);
        assert_eq!(overview.net_profit_pct, Decimal::ZERO);
        assert!(overview.top_customers.is_empty());
        assert!(overview.revenue_by_month.is_empty());
    }
}
