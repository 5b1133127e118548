//! The in-memory repository.
//!
//! A [`Repository`] owns one array per entity. It is built once at startup,
//! either from seed ([`Repository::seeded`]) or record by record through the
//! `with_*` builders, and is then only read. Editable copies are made by
//! the store crate; the repository itself never mutates after construction.

use tracing::info;

use medsupply_kpi::overview::dashboard_overview;
use medsupply_kpi::{BranchKpiReport, DataView, branch_kpi_report, classification_metrics};
use medsupply_types::{
    ClassificationMetrics, Customer, DashboardOverview, Employee, Expense, InventoryItem, Invoice,
    SalesOrder, Supplier,
};

use crate::config::SeedConfig;
use crate::generate;

/// Read-only entity arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Repository {
    customers: Vec<Customer>,
    suppliers: Vec<Supplier>,
    inventory: Vec<InventoryItem>,
    orders: Vec<SalesOrder>,
    invoices: Vec<Invoice>,
    expenses: Vec<Expense>,
    employees: Vec<Employee>,
}

impl Repository {
    /// A repository with no records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Generate every array from `config`.
    ///
    /// Deterministic: equal configs produce equal repositories.
    pub fn seeded(config: &SeedConfig) -> Self {
        let customers = generate::customers(config);
        let suppliers = generate::suppliers(config);
        let inventory = generate::inventory(config, &suppliers);
        let orders = generate::orders(config, &customers);
        let invoices = generate::invoices(config, &orders);
        let expenses = generate::expenses(config);
        let employees = generate::employees(config);

        info!(
            customers = customers.len(),
            suppliers = suppliers.len(),
            inventory = inventory.len(),
            orders = orders.len(),
            invoices = invoices.len(),
            expenses = expenses.len(),
            employees = employees.len(),
            reference_date = %config.reference_date,
            "Seeded repository"
        );

        Self {
            customers,
            suppliers,
            inventory,
            orders,
            invoices,
            expenses,
            employees,
        }
    }

    /// Replace the customer array.
    #[must_use]
    pub fn with_customers(mut self, customers: Vec<Customer>) -> Self {
        self.customers = customers;
        self
    }

    /// Replace the supplier array.
    #[must_use]
    pub fn with_suppliers(mut self, suppliers: Vec<Supplier>) -> Self {
        self.suppliers = suppliers;
        self
    }

    /// Replace the inventory array.
    #[must_use]
    pub fn with_inventory(mut self, inventory: Vec<InventoryItem>) -> Self {
        self.inventory = inventory;
        self
    }

    /// Replace the sales order array.
    #[must_use]
    pub fn with_orders(mut self, orders: Vec<SalesOrder>) -> Self {
        self.orders = orders;
        self
    }

    /// Replace the invoice array.
    #[must_use]
    pub fn with_invoices(mut self, invoices: Vec<Invoice>) -> Self {
        self.invoices = invoices;
        self
    }

    /// Replace the expense array.
    #[must_use]
    pub fn with_expenses(mut self, expenses: Vec<Expense>) -> Self {
        self.expenses = expenses;
        self
    }

    /// Replace the employee array.
    #[must_use]
    pub fn with_employees(mut self, employees: Vec<Employee>) -> Self {
        self.employees = employees;
        self
    }

    /// All customers.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// All suppliers.
    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// All inventory items.
    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    /// All sales orders.
    pub fn orders(&self) -> &[SalesOrder] {
        &self.orders
    }

    /// All invoices.
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    /// All expenses.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// All employees.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Borrow every array at once for the KPI functions.
    pub fn view(&self) -> DataView<'_> {
        DataView {
            customers: &self.customers,
            suppliers: &self.suppliers,
            inventory: &self.inventory,
            orders: &self.orders,
            invoices: &self.invoices,
            expenses: &self.expenses,
            employees: &self.employees,
        }
    }

    /// Branch KPIs over the seeded arrays.
    pub fn branch_kpis(&self) -> BranchKpiReport {
        branch_kpi_report(&self.view())
    }

    /// Per-classification metrics over the seeded arrays.
    pub fn classification_metrics(&self) -> Vec<ClassificationMetrics> {
        classification_metrics(&self.customers, &self.orders)
    }

    /// Landing-page figures over the seeded arrays.
    pub fn overview(&self) -> DashboardOverview {
        dashboard_overview(&self.view())
    }
}

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)]
mod tests {
    use std::collections::HashSet;

    use medsupply_types::{Branch, InvoiceStatus, OrderStatus};
    use rust_decimal::Decimal;

    use super::*;
    use crate::derived;

    fn small() -> SeedConfig {
        SeedConfig {
            customers: 24,
            suppliers: 12,
            inventory_items: 30,
            sales_orders: 60,
            invoices: 40,
            expenses: 20,
            employees: 16,
            ..SeedConfig::default()
        }
    }

    #[test]
    fn seeding_is_deterministic() {
        assert_eq!(Repository::seeded(&small()), Repository::seeded(&small()));
    }

    #[test]
    fn seeded_counts_follow_config() {
        let repo = Repository::seeded(&small());
        assert_eq!(repo.customers().len(), 24);
        assert_eq!(repo.suppliers().len(), 12);
        assert_eq!(repo.inventory().len(), 30);
        assert_eq!(repo.orders().len(), 60);
        assert!(repo.invoices().len() <= 40);
        assert_eq!(repo.expenses().len(), 20);
        assert_eq!(repo.employees().len(), 16);
    }

    #[test]
    fn default_seed_sizes() {
        let repo = Repository::seeded(&SeedConfig::default());
        assert_eq!(repo.customers().len(), 120);
        assert_eq!(repo.invoices().len(), 250);
        assert_eq!(repo.employees().len(), 80);
    }

    #[test]
    fn ids_are_unique() {
        let repo = Repository::seeded(&small());
        let ids: HashSet<_> = repo.customers().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), repo.customers().len());
        let ids: HashSet<_> = repo.orders().iter().map(|o| o.id).collect();
        assert_eq!(ids.len(), repo.orders().len());
    }

    #[test]
    fn every_branch_has_customers() {
        let repo = Repository::seeded(&small());
        for branch in Branch::ALL {
            assert!(repo.customers().iter().any(|c| c.branch == *branch));
        }
    }

    #[test]
    fn orders_reference_existing_customers() {
        let repo = Repository::seeded(&small());
        for order in repo.orders() {
            let customer = repo.customers().iter().find(|c| c.id == order.customer_id);
            assert!(customer.is_some_and(|c| c.branch == order.branch));
            assert_eq!(order.total, order.subtotal + order.vat);
        }
        assert!(repo.orders().iter().any(|o| o.status == OrderStatus::Cancelled));
    }

    #[test]
    fn invoice_status_matches_payment() {
        let repo = Repository::seeded(&small());
        for invoice in repo.invoices() {
            assert!(invoice.paid_amount <= invoice.amount);
            match invoice.status {
                InvoiceStatus::Paid => assert_eq!(invoice.outstanding(), Decimal::ZERO),
                InvoiceStatus::Unpaid => assert_eq!(invoice.paid_amount, Decimal::ZERO),
                InvoiceStatus::Partial | InvoiceStatus::Overdue => {
                    assert!(invoice.outstanding() > Decimal::ZERO);
                }
            }
        }
    }

    #[test]
    fn derived_fields_follow_identity() {
        let repo = Repository::seeded(&small());
        for employee in repo.employees() {
            assert!((60..=100).contains(&employee.performance_score));
            assert_eq!(
                employee.performance_score,
                derived::appraisal_score(&employee.employee_number)
            );
            assert_eq!(employee.manager, derived::direct_manager(&employee.name, employee.branch));
        }
        for supplier in repo.suppliers() {
            assert!((1..=5).contains(&supplier.rating));
            assert_eq!(supplier.rating, derived::supplier_rating(&supplier.name));
        }
        for customer in repo.customers() {
            assert_eq!(customer.account_manager, derived::account_manager(&customer.code));
        }
    }

    #[test]
    fn kpis_cover_all_branches() {
        let report = Repository::seeded(&small()).branch_kpis();
        assert_eq!(report.kpis.len(), 4);
        assert!(report.allocation_drift.abs() <= Decimal::new(3, 0));

        let empty = Repository::empty().branch_kpis();
        assert_eq!(empty.kpis.len(), 4);
        assert!(empty.kpis.iter().all(|k| k.total_revenue.is_zero()));
    }

    #[test]
    fn builders_replace_arrays() {
        let seeded = Repository::seeded(&small());
        let repo = Repository::empty().with_customers(seeded.customers().to_vec());
        assert_eq!(repo.customers().len(), 24);
        assert!(repo.orders().is_empty());
        assert_eq!(repo.classification_metrics().len(), 4);
    }
}
