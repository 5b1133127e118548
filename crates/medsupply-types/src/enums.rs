//! Enumeration types for the MedSupply dashboard.
//!
//! Every enum carries a display label that is also its wire form. The
//! dashboard frontend matches on these strings exactly, so labels must
//! never change. [`Branch`] and [`PerformanceTier`] use Arabic labels.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a closed enum whose serde form is its display label.
///
/// Adds `ALL`, `label()`, `from_label()` and a [`Display`] impl.
/// `from_label` accepts either the label or the variant name
/// (ASCII case-insensitive) so query strings can use `riyadh` as well as
/// `الرياض`.
///
/// [`Display`]: core::fmt::Display
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $label:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The display label, identical to the serialized form.
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            /// Resolve a label or variant name back to the enum.
            pub fn from_label(value: &str) -> Option<Self> {
                let value = value.trim();
                Self::ALL.iter().copied().find(|candidate| {
                    candidate.label() == value || candidate.variant_name().eq_ignore_ascii_case(value)
                })
            }

            /// The Rust variant name, used as an ASCII alias.
            pub const fn variant_name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Branches
// ---------------------------------------------------------------------------

labeled_enum! {
    /// One of the four physical branches. The sole grouping dimension for
    /// every KPI aggregation.
    Branch {
        /// Riyadh (head office).
        Riyadh => "الرياض",
        /// Jeddah.
        Jeddah => "جدة",
        /// Dammam.
        Dammam => "الدمام",
        /// Mecca.
        Mecca => "مكة",
    }
}

impl Branch {
    /// Number of branches.
    pub const COUNT: usize = 4;

    /// Branch for a seed index, cycling through [`Branch::ALL`].
    pub const fn from_index(index: usize) -> Self {
        match index % Self::COUNT {
            0 => Self::Riyadh,
            1 => Self::Jeddah,
            2 => Self::Dammam,
            _ => Self::Mecca,
        }
    }

    /// English city name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Riyadh => "Riyadh",
            Self::Jeddah => "Jeddah",
            Self::Dammam => "Dammam",
            Self::Mecca => "Mecca",
        }
    }
}

labeled_enum! {
    /// Performance tier derived from a branch's net profit percentage.
    PerformanceTier {
        /// `net_profit_pct >= 20`.
        Excellent => "ممتاز",
        /// `net_profit_pct >= 10`.
        Good => "جيد",
        /// `net_profit_pct >= 0`.
        Average => "متوسط",
        /// Negative margin.
        Low => "منخفض",
    }
}

// ---------------------------------------------------------------------------
// Customers
// ---------------------------------------------------------------------------

labeled_enum! {
    /// Customer/order tag used for filtering and aggregate metrics.
    Classification {
        /// Strategic account.
        Vip => "VIP",
        /// Large recurring buyer.
        HighValue => "High Value",
        /// Ordinary account.
        Regular => "Regular",
        /// Late payer or over credit limit.
        Risk => "Risk",
    }
}

labeled_enum! {
    /// Kind of healthcare facility a customer operates.
    CustomerType {
        /// Hospital.
        Hospital => "Hospital",
        /// Clinic or medical center.
        Clinic => "Clinic",
        /// Retail pharmacy.
        Pharmacy => "Pharmacy",
        /// Diagnostic laboratory.
        Laboratory => "Laboratory",
    }
}

// ---------------------------------------------------------------------------
// Products and suppliers
// ---------------------------------------------------------------------------

labeled_enum! {
    /// Product category shared by inventory and suppliers.
    ProductCategory {
        /// Gloves, syringes, dressings.
        Consumables => "Consumables",
        /// Monitors, pumps, beds.
        Equipment => "Equipment",
        /// Medicines.
        Pharmaceuticals => "Pharmaceuticals",
        /// Reagents and lab kits.
        Laboratory => "Laboratory",
        /// Surgical instruments.
        Surgical => "Surgical",
        /// Masks, gowns, face shields.
        Protective => "Protective",
    }
}

labeled_enum! {
    /// Supplier account status.
    SupplierStatus {
        /// Orders may be placed.
        Active => "Active",
        /// Orders on hold.
        Suspended => "Suspended",
    }
}

labeled_enum! {
    /// Stock level derived from current stock and reorder level.
    StockStatus {
        /// Above the reorder level.
        InStock => "In Stock",
        /// At or below the reorder level but not empty.
        Low => "Low Stock",
        /// Zero units on hand.
        OutOfStock => "Out of Stock",
    }
}

// ---------------------------------------------------------------------------
// Sales and finance
// ---------------------------------------------------------------------------

labeled_enum! {
    /// Sales order lifecycle status.
    OrderStatus {
        /// Awaiting confirmation.
        Pending => "Pending",
        /// Being picked at the warehouse.
        Processing => "Processing",
        /// Handed to logistics.
        Shipped => "Shipped",
        /// Received by the customer.
        Delivered => "Delivered",
        /// Cancelled; excluded from revenue.
        Cancelled => "Cancelled",
    }
}

labeled_enum! {
    /// Invoice payment status.
    InvoiceStatus {
        /// Fully paid.
        Paid => "Paid",
        /// Partially paid.
        Partial => "Partial",
        /// Nothing paid, not yet due.
        Unpaid => "Unpaid",
        /// Past due date with an outstanding balance.
        Overdue => "Overdue",
    }
}

labeled_enum! {
    /// Expense ledger category.
    ExpenseCategory {
        /// Payroll.
        Salaries => "Salaries",
        /// Warehouse and office rent.
        Rent => "Rent",
        /// Electricity, water, telecom.
        Utilities => "Utilities",
        /// Fleet and shipping.
        Logistics => "Logistics",
        /// Campaigns and exhibitions.
        Marketing => "Marketing",
        /// Equipment servicing.
        Maintenance => "Maintenance",
        /// Anything else.
        Other => "Other",
    }
}

// ---------------------------------------------------------------------------
// Employees
// ---------------------------------------------------------------------------

labeled_enum! {
    /// Department an employee belongs to.
    Department {
        /// Field and inside sales.
        Sales => "Sales",
        /// Warehouse operations.
        Warehouse => "Warehouse",
        /// Accounting and collections.
        Finance => "Finance",
        /// Delivery fleet.
        Logistics => "Logistics",
        /// Management and HR.
        Administration => "Administration",
        /// Customer support.
        CustomerService => "Customer Service",
    }
}

labeled_enum! {
    /// Employment status.
    EmployeeStatus {
        /// Currently working.
        Active => "Active",
        /// Temporarily absent.
        OnLeave => "On Leave",
        /// No longer employed.
        Terminated => "Terminated",
    }
}
