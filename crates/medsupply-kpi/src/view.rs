//! Borrowed view over the entity arrays.

use medsupply_types::{Customer, Employee, Expense, InventoryItem, Invoice, SalesOrder, Supplier};

/// Read-only slices of every entity array.
///
/// Both the seeded repository and the editable workspace hand one of these
/// to the KPI functions, so KPIs always reflect whichever arrays the caller
/// is looking at.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataView<'a> {
    /// Customers.
    pub customers: &'a [Customer],
    /// Suppliers.
    pub suppliers: &'a [Supplier],
    /// Inventory items.
    pub inventory: &'a [InventoryItem],
    /// Sales orders.
    pub orders: &'a [SalesOrder],
    /// Invoices.
    pub invoices: &'a [Invoice],
    /// Expenses.
    pub expenses: &'a [Expense],
    /// Employees.
    pub employees: &'a [Employee],
}
