//! The editable copy of the repository.
//!
//! A [`Workspace`] holds one [`Store`] per dashboard screen, each starting
//! from a copy of the matching [`Repository`] array. KPIs read whatever the
//! stores currently hold, so edits show up in the next KPI request.

use medsupply_data::Repository;
use medsupply_kpi::overview::dashboard_overview;
use medsupply_kpi::{BranchKpiReport, DataView, branch_kpi_report, classification_metrics};
use medsupply_types::{
    ClassificationMetrics, Customer, DashboardOverview, Employee, Expense, InventoryItem, Invoice,
    SalesOrder, Supplier,
};
use tracing::info;

use crate::query::Listable;
use crate::record::Validate;
use crate::store::Store;

/// One store per screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workspace {
    /// Customers screen.
    pub customers: Store<Customer>,
    /// Suppliers screen.
    pub suppliers: Store<Supplier>,
    /// Inventory screen.
    pub inventory: Store<InventoryItem>,
    /// Sales orders screen.
    pub orders: Store<SalesOrder>,
    /// Invoices screen.
    pub invoices: Store<Invoice>,
    /// Expenses screen.
    pub expenses: Store<Expense>,
    /// Employees screen.
    pub employees: Store<Employee>,
}

impl Workspace {
    /// Copy every array out of `repository`.
    pub fn from_repository(repository: &Repository) -> Self {
        Self {
            customers: Store::new(repository.customers().to_vec()),
            suppliers: Store::new(repository.suppliers().to_vec()),
            inventory: Store::new(repository.inventory().to_vec()),
            orders: Store::new(repository.orders().to_vec()),
            invoices: Store::new(repository.invoices().to_vec()),
            expenses: Store::new(repository.expenses().to_vec()),
            employees: Store::new(repository.employees().to_vec()),
        }
    }

    /// Discard all edits and copy the arrays again.
    pub fn reset(&mut self, repository: &Repository) {
        *self = Self::from_repository(repository);
        info!("Workspace reset to seeded data");
    }

    /// Borrow the current arrays for the KPI functions.
    pub fn view(&self) -> DataView<'_> {
        DataView {
            customers: self.customers.items(),
            suppliers: self.suppliers.items(),
            inventory: self.inventory.items(),
            orders: self.orders.items(),
            invoices: self.invoices.items(),
            expenses: self.expenses.items(),
            employees: self.employees.items(),
        }
    }

    /// Branch KPIs over the current arrays.
    pub fn branch_kpis(&self) -> BranchKpiReport {
        branch_kpi_report(&self.view())
    }

    /// Per-classification metrics over the current arrays.
    pub fn classification_metrics(&self) -> Vec<ClassificationMetrics> {
        classification_metrics(self.customers.items(), self.orders.items())
    }

    /// Landing-page figures over the current arrays.
    pub fn overview(&self) -> DashboardOverview {
        dashboard_overview(&self.view())
    }
}

/// An entity that has a screen, and so a store, in the [`Workspace`].
pub trait Collection: Listable + Validate {
    /// URL segment of the screen, e.g. `customers`.
    const SCREEN: &'static str;

    /// The screen's store.
    fn store(workspace: &Workspace) -> &Store<Self>;

    /// The screen's store, mutably.
    fn store_mut(workspace: &mut Workspace) -> &mut Store<Self>;
}

macro_rules! impl_collection {
    ($ty:ty, $field:ident, $screen:literal) => {
        impl Collection for $ty {
            const SCREEN: &'static str = $screen;

            fn store(workspace: &Workspace) -> &Store<Self> {
                &workspace.$field
            }

            fn store_mut(workspace: &mut Workspace) -> &mut Store<Self> {
                &mut workspace.$field
            }
        }
    };
}

impl_collection!(Customer, customers, "customers");
impl_collection!(Supplier, suppliers, "suppliers");
impl_collection!(InventoryItem, inventory, "inventory");
impl_collection!(SalesOrder, orders, "orders");
impl_collection!(Invoice, invoices, "invoices");
impl_collection!(Expense, expenses, "expenses");
impl_collection!(Employee, employees, "employees");
