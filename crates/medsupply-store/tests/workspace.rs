//! Workspace edits, list queries and KPI recomputation.

#![allow(
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects
)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use medsupply_data::{Repository, SeedConfig, derived};
use medsupply_store::{
    Action, Collection, ListQuery, PagingConfig, QueryError, Record, SortOrder, StoreError,
    Workspace,
};
use medsupply_types::{
    Branch, Classification, Customer, CustomerId, Employee, EmployeeStatus, Expense,
    ExpenseCategory, ExpenseId, OrderStatus, SalesOrder, SalesOrderId,
};

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

fn workspace() -> (Repository, Workspace) {
    let repo = Repository::seeded(&small());
    let ws = Workspace::from_repository(&repo);
    (repo, ws)
}

fn order_for(customer: &Customer, total: Decimal) -> SalesOrder {
    SalesOrder {
        id: SalesOrderId::new(),
        order_number: String::from("SO-2025-9001"),
        customer_id: customer.id,
        customer_name: customer.name.clone(),
        branch: customer.branch,
        order_date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
        status: OrderStatus::Pending,
        classification: customer.classification,
        items_count: 1,
        subtotal: total,
        vat: Decimal::ZERO,
        total,
    }
}

#[test]
fn workspace_starts_as_a_copy() {
    let (repo, ws) = workspace();
    assert_eq!(ws.customers.items(), repo.customers());
    assert_eq!(ws.branch_kpis(), repo.branch_kpis());
    assert_eq!(ws.overview(), repo.overview());
}

#[test]
fn created_order_moves_branch_revenue() {
    let (repo, mut ws) = workspace();
    let customer = repo
        .customers()
        .iter()
        .find(|c| c.branch == Branch::Dammam)
        .unwrap()
        .clone();
    let before = ws.branch_kpis();

    ws.orders
        .dispatch(Action::Create(order_for(&customer, dec!(1000))))
        .unwrap();

    let after = ws.branch_kpis();
    let revenue = |report: &medsupply_kpi::BranchKpiReport, branch: Branch| {
        report
            .kpis
            .iter()
            .find(|k| k.branch == branch)
            .unwrap()
            .total_revenue
    };
    assert_eq!(
        revenue(&after, Branch::Dammam) - revenue(&before, Branch::Dammam),
        dec!(1000)
    );
    assert_eq!(revenue(&after, Branch::Riyadh), revenue(&before, Branch::Riyadh));
    // Seeded data is untouched.
    assert_eq!(repo.branch_kpis(), before);
}

#[test]
fn deleting_a_customer_reduces_clients() {
    let (_, mut ws) = workspace();
    let victim = ws.customers.items().first().unwrap().clone();
    let before = ws
        .branch_kpis()
        .kpis
        .iter()
        .find(|k| k.branch == victim.branch)
        .unwrap()
        .clients_count;

    ws.customers.dispatch(Action::Delete(victim.id)).unwrap();

    let after = ws
        .branch_kpis()
        .kpis
        .iter()
        .find(|k| k.branch == victim.branch)
        .unwrap()
        .clients_count;
    assert_eq!(after, before - 1);
    assert!(ws.customers.get(victim.id).is_none());
}

#[test]
fn failed_action_keeps_array() {
    let (_, mut ws) = workspace();
    let len = ws.customers.len();
    let err = ws
        .customers
        .dispatch(Action::Delete(CustomerId::new()))
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound { kind: "customer", .. }));
    assert_eq!(ws.customers.len(), len);

    let mut bad = ws.customers.items().first().unwrap().clone();
    bad.name = String::new();
    let err = ws.customers.dispatch(Action::Update(bad)).unwrap_err();
    assert!(matches!(err, StoreError::Invalid { field: "name", .. }));
}

#[test]
fn expenses_drive_allocation() {
    let (_, mut ws) = workspace();
    let before = ws.branch_kpis();
    let expense = Expense {
        id: ExpenseId::new(),
        reference: String::from("EXP-9001"),
        category: ExpenseCategory::Marketing,
        description: String::from("Trade show"),
        amount: dec!(40000),
        date: NaiveDate::from_ymd_opt(2024, 11, 2).unwrap(),
    };
    ws.expenses.dispatch(Action::Create(expense)).unwrap();
    let after = ws.branch_kpis();

    let allocated = |r: &medsupply_kpi::BranchKpiReport| {
        r.kpis.iter().map(|k| k.total_expenses).sum::<Decimal>()
    };
    let delta = allocated(&after) - allocated(&before);
    assert!((delta - dec!(40000)).abs() <= dec!(6));
}

#[test]
fn reset_discards_edits() {
    let (repo, mut ws) = workspace();
    let id = ws.employees.items().first().unwrap().id();
    ws.employees.dispatch(Action::Delete(id)).unwrap();
    assert_ne!(ws.employees.items(), repo.employees());
    ws.reset(&repo);
    assert_eq!(ws.employees.items(), repo.employees());
}

#[test]
fn update_rederives_manager_and_score() {
    let (_, mut ws) = workspace();
    let mut employee = ws.employees.items().first().unwrap().clone();
    employee.name = String::from("فيصل الدوسري");
    employee.manager = String::from("Nobody");
    employee.performance_score = 7;

    let id = ws.employees.dispatch(Action::Update(employee.clone())).unwrap();
    let stored = ws.employees.get(id).unwrap();
    assert_eq!(stored.name, "فيصل الدوسري");
    assert_eq!(stored.manager, derived::direct_manager(&employee.name, employee.branch));
    assert_eq!(
        stored.performance_score,
        derived::appraisal_score(&employee.employee_number)
    );
}

#[test]
fn create_ignores_client_supplied_derived_fields() {
    let (_, mut ws) = workspace();
    let mut customer = ws.customers.items().first().unwrap().clone();
    customer.id = CustomerId::new();
    customer.code = String::from("CUS-9001");
    customer.account_manager = String::from("Nobody");

    let id = ws.customers.dispatch(Action::Create(customer)).unwrap();
    assert_eq!(
        ws.customers.get(id).unwrap().account_manager,
        derived::account_manager("CUS-9001")
    );

    let mut supplier = ws.suppliers.items().first().unwrap().clone();
    supplier.id = medsupply_types::SupplierId::new();
    supplier.name = String::from("Nipro Medical (Mecca)");
    supplier.rating = 5;
    let id = ws.suppliers.dispatch(Action::Create(supplier)).unwrap();
    assert_eq!(
        ws.suppliers.get(id).unwrap().rating,
        derived::supplier_rating("Nipro Medical")
    );
}

#[test]
fn query_filters_by_branch_and_classification() {
    let (_, ws) = workspace();
    let query = ListQuery {
        branch: Some(String::from("جدة")),
        classification: Some(String::from("vip")),
        per_page: Some(100),
        ..ListQuery::default()
    };
    let page = query
        .apply(Customer::store(&ws).items(), PagingConfig::default())
        .unwrap();
    assert!(page
        .items
        .iter()
        .all(|c| c.branch == Branch::Jeddah && c.classification == Classification::Vip));
    let expected = ws
        .customers
        .items()
        .iter()
        .filter(|c| c.branch == Branch::Jeddah && c.classification == Classification::Vip)
        .count();
    assert_eq!(page.total, expected);
}

#[test]
fn query_search_is_case_insensitive() {
    let (_, ws) = workspace();
    let query = ListQuery {
        search: Some(String::from("cus-0001")),
        ..ListQuery::default()
    };
    let page = query
        .apply(ws.customers.items(), PagingConfig::default())
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items.first().map(|c| c.code.as_str()), Some("CUS-0001"));
}

#[test]
fn query_sorts_and_pages() {
    let (_, ws) = workspace();
    let query = ListQuery {
        sort: Some(String::from("salary")),
        order: Some(SortOrder::Desc),
        page: Some(2),
        per_page: Some(5),
        ..ListQuery::default()
    };
    let page = query
        .apply(ws.employees.items(), PagingConfig::default())
        .unwrap();
    assert_eq!(page.total, 16);
    assert_eq!(page.total_pages, 4);
    assert_eq!(page.items.len(), 5);
    let salaries: Vec<Decimal> = page.items.iter().map(|e| e.salary).collect();
    assert!(salaries.windows(2).all(|w| w[0] >= w[1]));

    let past_end = ListQuery {
        page: Some(9),
        per_page: Some(5),
        ..ListQuery::default()
    }
    .apply(ws.employees.items(), PagingConfig::default())
    .unwrap();
    assert!(past_end.items.is_empty());
    assert_eq!(past_end.total, 16);
}

#[test]
fn query_status_matches_label_or_variant() {
    let (_, ws) = workspace();
    let by_label = ListQuery {
        status: Some(String::from("On Leave")),
        ..ListQuery::default()
    }
    .apply(ws.employees.items(), PagingConfig::default())
    .unwrap();
    let by_variant = ListQuery {
        status: Some(String::from("onleave")),
        ..ListQuery::default()
    }
    .apply(ws.employees.items(), PagingConfig::default())
    .unwrap();
    assert_eq!(by_label.total, by_variant.total);
    assert!(by_label
        .items
        .iter()
        .all(|e: &Employee| e.status == EmployeeStatus::OnLeave));
}

#[test]
fn query_rejects_bad_input() {
    let (_, ws) = workspace();
    let unknown_branch = ListQuery {
        branch: Some(String::from("Tabuk")),
        ..ListQuery::default()
    }
    .apply(ws.customers.items(), PagingConfig::default());
    assert_eq!(unknown_branch, Err(QueryError::UnknownBranch(String::from("Tabuk"))));

    let bad_sort = ListQuery {
        sort: Some(String::from("password")),
        ..ListQuery::default()
    }
    .apply(ws.customers.items(), PagingConfig::default());
    assert!(matches!(bad_sort, Err(QueryError::UnknownSortField { .. })));

    let zero_page = ListQuery {
        page: Some(0),
        ..ListQuery::default()
    }
    .apply(ws.customers.items(), PagingConfig::default());
    assert_eq!(zero_page, Err(QueryError::PageOutOfRange));
}

#[test]
fn per_page_is_clamped() {
    let (_, ws) = workspace();
    let paging = PagingConfig {
        default_per_page: 10,
        max_per_page: 12,
    };
    let page = ListQuery {
        per_page: Some(500),
        ..ListQuery::default()
    }
    .apply(ws.customers.items(), paging)
    .unwrap();
    assert_eq!(page.per_page, 12);
    assert_eq!(page.items.len(), 12);

    let default = ListQuery::default()
        .apply(ws.customers.items(), paging)
        .unwrap();
    assert_eq!(default.per_page, 10);
}
