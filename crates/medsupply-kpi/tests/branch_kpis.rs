//! End-to-end branch KPI computation over entity arrays.

#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use medsupply_kpi::{DataView, branch_kpi_report};
use medsupply_types::{
    Branch, Classification, Customer, CustomerId, CustomerType, Expense, ExpenseCategory,
    ExpenseId, InventoryItem, InventoryItemId, OrderStatus, PerformanceTier, ProductCategory,
    SalesOrder, SalesOrderId, SupplierId,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn order(branch: Branch, total: Decimal, status: OrderStatus) -> SalesOrder {
    SalesOrder {
        id: SalesOrderId::new(),
        order_number: String::from("SO-E2E"),
        customer_id: CustomerId::new(),
        customer_name: String::from("E2E"),
        branch,
        order_date: day(),
        status,
        classification: Classification::Regular,
        items_count: 3,
        subtotal: total,
        vat: Decimal::ZERO,
        total,
    }
}

fn expense(amount: Decimal) -> Expense {
    Expense {
        id: ExpenseId::new(),
        reference: String::from("EXP-E2E"),
        category: ExpenseCategory::Salaries,
        description: String::from("Payroll"),
        amount,
        date: day(),
    }
}

fn customer(branch: Branch) -> Customer {
    Customer {
        id: CustomerId::new(),
        code: String::from("CUS-E2E"),
        name: String::from("Clinic"),
        contact_person: String::from("Contact"),
        phone: String::from("0500000000"),
        email: String::from("c@example.com"),
        branch,
        customer_type: CustomerType::Clinic,
        classification: Classification::Regular,
        credit_limit: dec!(1000),
        balance: Decimal::ZERO,
        total_purchases: Decimal::ZERO,
        account_manager: String::from("Manager"),
        registered_on: day(),
        active: true,
    }
}

fn item(branch: Branch, stock: u32, cost: Decimal) -> InventoryItem {
    InventoryItem {
        id: InventoryItemId::new(),
        sku: String::from("SKU"),
        name: String::from("Gloves"),
        category: ProductCategory::Consumables,
        branch,
        supplier_id: SupplierId::new(),
        current_stock: stock,
        reorder_level: 10,
        unit_cost: cost,
        unit_price: cost,
        expiry_date: day(),
    }
}

#[test]
fn reference_scenario_matches_expected_figures() {
    let orders = vec![
        order(Branch::Riyadh, dec!(250000), OrderStatus::Delivered),
        order(Branch::Riyadh, dec!(150000), OrderStatus::Shipped),
        order(Branch::Jeddah, dec!(300000), OrderStatus::Delivered),
        order(Branch::Dammam, dec!(200000), OrderStatus::Pending),
        order(Branch::Mecca, dec!(100000), OrderStatus::Processing),
        // Cancelled orders never count as revenue.
        order(Branch::Mecca, dec!(900000), OrderStatus::Cancelled),
    ];
    let expenses = vec![expense(dec!(300000)), expense(dec!(200000))];

    let view = DataView {
        orders: &orders,
        expenses: &expenses,
        ..DataView::default()
    };
    let report = branch_kpi_report(&view);

    let allocated: Vec<Decimal> = report.kpis.iter().map(|k| k.total_expenses).collect();
    assert_eq!(allocated, vec![dec!(200000), dec!(150000), dec!(100000), dec!(50000)]);

    let profit: Vec<Decimal> = report.kpis.iter().map(|k| k.net_profit).collect();
    assert_eq!(profit, vec![dec!(200000), dec!(150000), dec!(100000), dec!(50000)]);

    for kpi in &report.kpis {
        assert_eq!(kpi.net_profit_pct, dec!(50.0));
        assert_eq!(kpi.performance, PerformanceTier::Excellent);
    }
    assert_eq!(report.allocation_drift, Decimal::ZERO);
}

#[test]
fn clients_and_inventory_are_grouped_by_branch() {
    let customers = vec![
        customer(Branch::Jeddah),
        customer(Branch::Jeddah),
        customer(Branch::Mecca),
    ];
    let inventory = vec![
        item(Branch::Jeddah, 10, dec!(2.50)),
        item(Branch::Jeddah, 4, dec!(100)),
        item(Branch::Riyadh, 0, dec!(999)),
    ];
    let view = DataView {
        customers: &customers,
        inventory: &inventory,
        ..DataView::default()
    };
    let report = branch_kpi_report(&view);

    let jeddah = report.kpis.iter().find(|k| k.branch == Branch::Jeddah).unwrap();
    assert_eq!(jeddah.clients_count, 2);
    assert_eq!(jeddah.inventory_value, dec!(425));

    let riyadh = report.kpis.iter().find(|k| k.branch == Branch::Riyadh).unwrap();
    assert_eq!(riyadh.clients_count, 0);
    assert_eq!(riyadh.inventory_value, Decimal::ZERO);
    assert_eq!(riyadh.net_profit_pct, Decimal::ZERO);
}

#[test]
fn allocation_drift_is_bounded_by_branch_count() {
    let orders = vec![
        order(Branch::Riyadh, dec!(3), OrderStatus::Delivered),
        order(Branch::Jeddah, dec!(3), OrderStatus::Delivered),
        order(Branch::Dammam, dec!(3), OrderStatus::Delivered),
        order(Branch::Mecca, dec!(1), OrderStatus::Delivered),
    ];
    for total in [dec!(1), dec!(7), dec!(333), dec!(1001), dec!(99999)] {
        let expenses = vec![expense(total)];
        let view = DataView {
            orders: &orders,
            expenses: &expenses,
            ..DataView::default()
        };
        let report = branch_kpi_report(&view);
        assert!(report.allocation_drift.abs() <= dec!(3), "drift too large for {total}");
    }
}
