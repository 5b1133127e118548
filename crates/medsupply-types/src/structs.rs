//! Entity records for the MedSupply dashboard.
//!
//! Each struct is one row of an in-memory "table". Every record that belongs
//! to a branch carries a [`Branch`] field, which is the grouping key for KPI
//! aggregation. Expenses deliberately have no branch: they are the
//! un-attributed total that gets allocated across branches.
//!
//! All money is [`Decimal`]; floats never touch a balance.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{
    Branch, Classification, CustomerType, Department, EmployeeStatus, ExpenseCategory,
    InvoiceStatus, OrderStatus, ProductCategory, StockStatus, SupplierStatus,
};
use crate::ids::{
    CustomerId, EmployeeId, ExpenseId, InventoryItemId, InvoiceId, SalesOrderId, SupplierId,
};

// ---------------------------------------------------------------------------
// Customer
// ---------------------------------------------------------------------------

/// A healthcare facility that buys from the company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Customer {
    /// Unique identifier.
    pub id: CustomerId,
    /// Human-facing account code, e.g. `CUS-0001`.
    pub code: String,
    /// Facility name.
    pub name: String,
    /// Purchasing contact.
    pub contact_person: String,
    /// Contact phone number.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Servicing branch.
    pub branch: Branch,
    /// Kind of facility.
    pub customer_type: CustomerType,
    /// Account classification tag.
    pub classification: Classification,
    /// Maximum open balance allowed.
    #[ts(as = "String")]
    pub credit_limit: Decimal,
    /// Current open balance.
    #[ts(as = "String")]
    pub balance: Decimal,
    /// Lifetime purchases.
    #[ts(as = "String")]
    pub total_purchases: Decimal,
    /// Sales employee responsible for the account.
    pub account_manager: String,
    /// Date the account was opened.
    pub registered_on: NaiveDate,
    /// Whether the account can place orders.
    pub active: bool,
}

// ---------------------------------------------------------------------------
// Supplier
// ---------------------------------------------------------------------------

/// A manufacturer or distributor the company buys from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Supplier {
    /// Unique identifier.
    pub id: SupplierId,
    /// Supplier code, e.g. `SUP-001`.
    pub code: String,
    /// Company name.
    pub name: String,
    /// Country of origin.
    pub country: String,
    /// Main product category supplied.
    pub category: ProductCategory,
    /// Branch that owns the relationship.
    pub branch: Branch,
    /// Quality rating from 1 to 5.
    pub rating: u8,
    /// Net payment terms in days.
    pub payment_terms_days: u32,
    /// Lifetime purchases from this supplier.
    #[ts(as = "String")]
    pub total_purchases: Decimal,
    /// Amount currently owed to the supplier.
    #[ts(as = "String")]
    pub outstanding_balance: Decimal,
    /// Account status.
    pub status: SupplierStatus,
}

// ---------------------------------------------------------------------------
// Inventory
// ---------------------------------------------------------------------------

/// A stocked product at one branch warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct InventoryItem {
    /// Unique identifier.
    pub id: InventoryItemId,
    /// Stock keeping unit.
    pub sku: String,
    /// Product name.
    pub name: String,
    /// Product category.
    pub category: ProductCategory,
    /// Warehouse branch.
    pub branch: Branch,
    /// Preferred supplier.
    pub supplier_id: SupplierId,
    /// Units on hand.
    pub current_stock: u32,
    /// Units at or below which the item needs reordering.
    pub reorder_level: u32,
    /// Landed cost per unit.
    #[ts(as = "String")]
    pub unit_cost: Decimal,
    /// Selling price per unit.
    #[ts(as = "String")]
    pub unit_price: Decimal,
    /// Expiry date of the oldest batch.
    pub expiry_date: NaiveDate,
}

impl InventoryItem {
    /// Value of the stock on hand at cost: `current_stock * unit_cost`.
    pub fn stock_value(&self) -> Decimal {
        self.unit_cost
            .saturating_mul(Decimal::from(self.current_stock))
    }

    /// Derived stock level.
    pub const fn stock_status(&self) -> StockStatus {
        if self.current_stock == 0 {
            StockStatus::OutOfStock
        } else if self.current_stock <= self.reorder_level {
            StockStatus::Low
        } else {
            StockStatus::InStock
        }
    }
}

// ---------------------------------------------------------------------------
// Sales orders
// ---------------------------------------------------------------------------

/// A customer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SalesOrder {
    /// Unique identifier.
    pub id: SalesOrderId,
    /// Order number, e.g. `SO-2024-0001`.
    pub order_number: String,
    /// Ordering customer.
    pub customer_id: CustomerId,
    /// Customer name at order time.
    pub customer_name: String,
    /// Fulfilling branch.
    pub branch: Branch,
    /// Order date.
    pub order_date: NaiveDate,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Customer classification at order time.
    pub classification: Classification,
    /// Number of line items.
    pub items_count: u32,
    /// Amount before VAT.
    #[ts(as = "String")]
    pub subtotal: Decimal,
    /// VAT amount.
    #[ts(as = "String")]
    pub vat: Decimal,
    /// `subtotal + vat`.
    #[ts(as = "String")]
    pub total: Decimal,
}

impl SalesOrder {
    /// Whether the order counts toward revenue.
    pub const fn is_revenue(&self) -> bool {
        !matches!(self.status, OrderStatus::Cancelled)
    }
}

// ---------------------------------------------------------------------------
// Invoices
// ---------------------------------------------------------------------------

/// A receivable issued to a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Invoice {
    /// Unique identifier.
    pub id: InvoiceId,
    /// Invoice number, e.g. `INV-2024-0001`.
    pub invoice_number: String,
    /// Billed customer.
    pub customer_id: CustomerId,
    /// Customer name at issue time.
    pub customer_name: String,
    /// Issuing branch.
    pub branch: Branch,
    /// Issue date.
    pub issue_date: NaiveDate,
    /// Payment due date.
    pub due_date: NaiveDate,
    /// Invoiced amount including VAT.
    #[ts(as = "String")]
    pub amount: Decimal,
    /// Amount received so far.
    #[ts(as = "String")]
    pub paid_amount: Decimal,
    /// Payment status.
    pub status: InvoiceStatus,
}

impl Invoice {
    /// Amount still owed; never negative.
    pub fn outstanding(&self) -> Decimal {
        self.amount
            .saturating_sub(self.paid_amount)
            .max(Decimal::ZERO)
    }
}

// ---------------------------------------------------------------------------
// Expenses
// ---------------------------------------------------------------------------

/// A company-level expense. Not attributed to a branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Expense {
    /// Unique identifier.
    pub id: ExpenseId,
    /// Voucher reference, e.g. `EXP-0001`.
    pub reference: String,
    /// Ledger category.
    pub category: ExpenseCategory,
    /// Free-text description.
    pub description: String,
    /// Amount spent.
    #[ts(as = "String")]
    pub amount: Decimal,
    /// Date incurred.
    pub date: NaiveDate,
}

// ---------------------------------------------------------------------------
// Employees
// ---------------------------------------------------------------------------

/// A staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Employee {
    /// Unique identifier.
    pub id: EmployeeId,
    /// Staff number, e.g. `EMP-001`.
    pub employee_number: String,
    /// Full name.
    pub name: String,
    /// Job title.
    pub position: String,
    /// Department.
    pub department: Department,
    /// Work location.
    pub branch: Branch,
    /// Monthly salary.
    #[ts(as = "String")]
    pub salary: Decimal,
    /// Hire date.
    pub hire_date: NaiveDate,
    /// Employment status.
    pub status: EmployeeStatus,
    /// Appraisal score from 0 to 100.
    pub performance_score: u8,
    /// Direct manager's name.
    pub manager: String,
}
