//! [`Record`], [`Validate`] and [`Listable`] for every entity.

use rust_decimal::Decimal;

use medsupply_data::derived;
use medsupply_types::{
    Branch, Classification, Customer, CustomerId, Employee, EmployeeId, Expense, ExpenseId,
    InventoryItem, InventoryItemId, Invoice, InvoiceId, SalesOrder, SalesOrderId, Supplier,
    SupplierId,
};

use crate::query::{Listable, SortValue, Tag};
use crate::record::{FieldError, Record, Validate, non_empty, non_negative};

/// Implements [`Record`] for a struct with an `id` field, optionally with
/// a body for [`Record::refresh_derived`].
macro_rules! impl_record {
    ($ty:ty, $id:ty, $kind:literal) => {
        impl_record!($ty, $id, $kind, |_record| {});
    };
    ($ty:ty, $id:ty, $kind:literal, |$record:ident| $refresh:block) => {
        impl Record for $ty {
            type Id = $id;
            const KIND: &'static str = $kind;

            fn id(&self) -> $id {
                self.id
            }

            fn set_id(&mut self, id: $id) {
                self.id = id;
            }

            fn refresh_derived(&mut self) {
                let $record = self;
                $refresh
            }
        }
    };
}

/// Builds a [`Tag`] from a labeled enum value.
macro_rules! tag {
    ($value:expr) => {
        Tag {
            label: $value.label(),
            variant: $value.variant_name(),
        }
    };
}

impl_record!(Customer, CustomerId, "customer", |customer| {
    customer.account_manager = derived::account_manager(&customer.code);
});
impl_record!(Supplier, SupplierId, "supplier", |supplier| {
    supplier.rating = derived::supplier_rating(&supplier.name);
});
impl_record!(InventoryItem, InventoryItemId, "inventory item");
impl_record!(SalesOrder, SalesOrderId, "sales order");
impl_record!(Invoice, InvoiceId, "invoice");
impl_record!(Expense, ExpenseId, "expense");
impl_record!(Employee, EmployeeId, "employee", |employee| {
    employee.performance_score = derived::appraisal_score(&employee.employee_number);
    employee.manager = derived::direct_manager(&employee.name, employee.branch);
});

const ACTIVE: Tag = Tag {
    label: "Active",
    variant: "Active",
};

const INACTIVE: Tag = Tag {
    label: "Inactive",
    variant: "Inactive",
};

// ---------------------------------------------------------------------------
// Customer
// ---------------------------------------------------------------------------

impl Validate for Customer {
    fn validate(&self) -> Result<(), FieldError> {
        non_empty("code", &self.code)?;
        non_empty("name", &self.name)?;
        non_negative("credit_limit", self.credit_limit)?;
        non_negative("total_purchases", self.total_purchases)
    }
}

impl Listable for Customer {
    const SORT_FIELDS: &'static [&'static str] = &[
        "code",
        "name",
        "branch",
        "balance",
        "credit_limit",
        "total_purchases",
        "registered_on",
    ];

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.code.as_str(),
            self.name.as_str(),
            self.contact_person.as_str(),
            self.phone.as_str(),
            self.email.as_str(),
            self.account_manager.as_str(),
        ]
    }

    fn branch(&self) -> Option<Branch> {
        Some(self.branch)
    }

    fn classification(&self) -> Option<Classification> {
        Some(self.classification)
    }

    fn status(&self) -> Option<Tag> {
        Some(if self.active { ACTIVE } else { INACTIVE })
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        Some(match field {
            "code" => self.code.as_str().into(),
            "name" => self.name.as_str().into(),
            "branch" => self.branch.label().into(),
            "balance" => self.balance.into(),
            "credit_limit" => self.credit_limit.into(),
            "total_purchases" => self.total_purchases.into(),
            "registered_on" => self.registered_on.into(),
            _ => return None,
        })
    }
}

// ---------------------------------------------------------------------------
// Supplier
// ---------------------------------------------------------------------------

impl Validate for Supplier {
    fn validate(&self) -> Result<(), FieldError> {
        non_empty("code", &self.code)?;
        non_empty("name", &self.name)?;
        if !(1..=5).contains(&self.rating) {
            return Err(FieldError::new("rating", "must be between 1 and 5"));
        }
        non_negative("total_purchases", self.total_purchases)?;
        non_negative("outstanding_balance", self.outstanding_balance)
    }
}

impl Listable for Supplier {
    const SORT_FIELDS: &'static [&'static str] =
        &["code", "name", "country", "rating", "total_purchases", "outstanding_balance"];

    fn search_fields(&self) -> Vec<&str> {
        vec![self.code.as_str(), self.name.as_str(), self.country.as_str(), self.category.label()]
    }

    fn branch(&self) -> Option<Branch> {
        Some(self.branch)
    }

    fn status(&self) -> Option<Tag> {
        Some(tag!(self.status))
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        Some(match field {
            "code" => self.code.as_str().into(),
            "name" => self.name.as_str().into(),
            "country" => self.country.as_str().into(),
            "rating" => u32::from(self.rating).into(),
            "total_purchases" => self.total_purchases.into(),
            "outstanding_balance" => self.outstanding_balance.into(),
            _ => return None,
        })
    }
}

// ---------------------------------------------------------------------------
// Inventory
// ---------------------------------------------------------------------------

impl Validate for InventoryItem {
    fn validate(&self) -> Result<(), FieldError> {
        non_empty("sku", &self.sku)?;
        non_empty("name", &self.name)?;
        non_negative("unit_cost", self.unit_cost)?;
        non_negative("unit_price", self.unit_price)
    }
}

impl Listable for InventoryItem {
    const SORT_FIELDS: &'static [&'static str] = &[
        "sku",
        "name",
        "current_stock",
        "reorder_level",
        "unit_cost",
        "unit_price",
        "stock_value",
        "expiry_date",
    ];

    fn search_fields(&self) -> Vec<&str> {
        vec![self.sku.as_str(), self.name.as_str(), self.category.label()]
    }

    fn branch(&self) -> Option<Branch> {
        Some(self.branch)
    }

    fn status(&self) -> Option<Tag> {
        Some(tag!(self.stock_status()))
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        Some(match field {
            "sku" => self.sku.as_str().into(),
            "name" => self.name.as_str().into(),
            "current_stock" => self.current_stock.into(),
            "reorder_level" => self.reorder_level.into(),
            "unit_cost" => self.unit_cost.into(),
            "unit_price" => self.unit_price.into(),
            "stock_value" => self.stock_value().into(),
            "expiry_date" => self.expiry_date.into(),
            _ => return None,
        })
    }
}

// ---------------------------------------------------------------------------
// Sales orders
// ---------------------------------------------------------------------------

impl Validate for SalesOrder {
    fn validate(&self) -> Result<(), FieldError> {
        non_empty("order_number", &self.order_number)?;
        non_empty("customer_name", &self.customer_name)?;
        non_negative("subtotal", self.subtotal)?;
        non_negative("vat", self.vat)?;
        if self.subtotal.checked_add(self.vat) != Some(self.total) {
            return Err(FieldError::new("total", "must equal subtotal + vat"));
        }
        Ok(())
    }
}

impl Listable for SalesOrder {
    const SORT_FIELDS: &'static [&'static str] =
        &["order_number", "customer_name", "order_date", "items_count", "subtotal", "total"];

    fn search_fields(&self) -> Vec<&str> {
        vec![self.order_number.as_str(), self.customer_name.as_str()]
    }

    fn branch(&self) -> Option<Branch> {
        Some(self.branch)
    }

    fn classification(&self) -> Option<Classification> {
        Some(self.classification)
    }

    fn status(&self) -> Option<Tag> {
        Some(tag!(self.status))
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        Some(match field {
            "order_number" => self.order_number.as_str().into(),
            "customer_name" => self.customer_name.as_str().into(),
            "order_date" => self.order_date.into(),
            "items_count" => self.items_count.into(),
            "subtotal" => self.subtotal.into(),
            "total" => self.total.into(),
            _ => return None,
        })
    }
}

// ---------------------------------------------------------------------------
// Invoices
// ---------------------------------------------------------------------------

impl Validate for Invoice {
    fn validate(&self) -> Result<(), FieldError> {
        non_empty("invoice_number", &self.invoice_number)?;
        non_negative("amount", self.amount)?;
        non_negative("paid_amount", self.paid_amount)?;
        if self.paid_amount > self.amount {
            return Err(FieldError::new("paid_amount", "must not exceed amount"));
        }
        if self.due_date < self.issue_date {
            return Err(FieldError::new("due_date", "must not precede issue_date"));
        }
        Ok(())
    }
}

impl Listable for Invoice {
    const SORT_FIELDS: &'static [&'static str] = &[
        "invoice_number",
        "customer_name",
        "issue_date",
        "due_date",
        "amount",
        "paid_amount",
        "outstanding",
    ];

    fn search_fields(&self) -> Vec<&str> {
        vec![self.invoice_number.as_str(), self.customer_name.as_str()]
    }

    fn branch(&self) -> Option<Branch> {
        Some(self.branch)
    }

    fn status(&self) -> Option<Tag> {
        Some(tag!(self.status))
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        Some(match field {
            "invoice_number" => self.invoice_number.as_str().into(),
            "customer_name" => self.customer_name.as_str().into(),
            "issue_date" => self.issue_date.into(),
            "due_date" => self.due_date.into(),
            "amount" => self.amount.into(),
            "paid_amount" => self.paid_amount.into(),
            "outstanding" => self.outstanding().into(),
            _ => return None,
        })
    }
}

// ---------------------------------------------------------------------------
// Expenses
// ---------------------------------------------------------------------------

impl Validate for Expense {
    fn validate(&self) -> Result<(), FieldError> {
        non_empty("reference", &self.reference)?;
        non_empty("description", &self.description)?;
        if self.amount <= Decimal::ZERO {
            return Err(FieldError::new("amount", "must be positive"));
        }
        Ok(())
    }
}

impl Listable for Expense {
    const SORT_FIELDS: &'static [&'static str] = &["reference", "category", "amount", "date"];

    fn search_fields(&self) -> Vec<&str> {
        vec![self.reference.as_str(), self.description.as_str(), self.category.label()]
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        Some(match field {
            "reference" => self.reference.as_str().into(),
            "category" => self.category.label().into(),
            "amount" => self.amount.into(),
            "date" => self.date.into(),
            _ => return None,
        })
    }
}

// ---------------------------------------------------------------------------
// Employees
// ---------------------------------------------------------------------------

impl Validate for Employee {
    fn validate(&self) -> Result<(), FieldError> {
        non_empty("employee_number", &self.employee_number)?;
        non_empty("name", &self.name)?;
        non_negative("salary", self.salary)?;
        if self.performance_score > 100 {
            return Err(FieldError::new("performance_score", "must be between 0 and 100"));
        }
        Ok(())
    }
}

impl Listable for Employee {
    const SORT_FIELDS: &'static [&'static str] = &[
        "employee_number",
        "name",
        "salary",
        "hire_date",
        "performance_score",
    ];

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.employee_number.as_str(),
            self.name.as_str(),
            self.position.as_str(),
            self.manager.as_str(),
            self.department.label(),
        ]
    }

    fn branch(&self) -> Option<Branch> {
        Some(self.branch)
    }

    fn status(&self) -> Option<Tag> {
        Some(tag!(self.status))
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        Some(match field {
            "employee_number" => self.employee_number.as_str().into(),
            "name" => self.name.as_str().into(),
            "salary" => self.salary.into(),
            "hire_date" => self.hire_date.into(),
            "performance_score" => u32::from(self.performance_score).into(),
            _ => return None,
        })
    }
}
