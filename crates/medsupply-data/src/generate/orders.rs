use rust_decimal::Decimal;

use medsupply_types::{Customer, OrderStatus, SalesOrder, SalesOrderId};

use super::{days_before, seed_index};
use crate::config::SeedConfig;
use crate::hash::{mix, mix_range};
use medsupply_kpi::rounding::round_half_up_dp;

/// Saudi VAT rate: 15 %.
pub const VAT_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// Status by position in a repeating block of twenty orders: most are
/// delivered, one in twenty is cancelled.
const fn status_for(index: u64) -> OrderStatus {
    match index % 20 {
        0 => OrderStatus::Cancelled,
        1 | 2 => OrderStatus::Pending,
        3..=5 => OrderStatus::Processing,
        6..=8 => OrderStatus::Shipped,
        _ => OrderStatus::Delivered,
    }
}

/// Generate `config.sales_orders` orders against `customers`.
///
/// Each order inherits its customer's branch and classification. Returns
/// an empty array when there are no customers to order.
pub fn orders(config: &SeedConfig, customers: &[Customer]) -> Vec<SalesOrder> {
    let Ok(customer_count) = u64::try_from(customers.len()) else {
        return Vec::new();
    };
    if customer_count == 0 {
        return Vec::new();
    }

    (0..config.sales_orders)
        .filter_map(|i| {
            let n = seed_index(i);
            let position = usize::try_from(mix(n, 41).checked_rem(customer_count)?).ok()?;
            let customer = customers.get(position)?;
            Some(order(n, customer, config))
        })
        .collect()
}

fn order(n: u64, customer: &Customer, config: &SeedConfig) -> SalesOrder {
    let order_date = days_before(config.reference_date, mix_range(n, 42, 0, 364));
    let items_count = u32::try_from(mix_range(n, 43, 1, 25)).unwrap_or(1);
    let unit_value = Decimal::new(i64::try_from(mix_range(n, 44, 15_000, 900_000)).unwrap_or(15_000), 2);
    let subtotal = unit_value.saturating_mul(Decimal::from(items_count));
    let vat = round_half_up_dp(subtotal.saturating_mul(VAT_RATE), 2);

    SalesOrder {
        id: SalesOrderId::seeded(n),
        order_number: format!("SO-{}-{:04}", order_date.format("%Y"), n.saturating_add(1)),
        customer_id: customer.id,
        customer_name: customer.name.clone(),
        branch: customer.branch,
        order_date,
        status: status_for(n),
        classification: customer.classification,
        items_count,
        subtotal,
        vat,
        total: subtotal.saturating_add(vat),
    }
}
