//! Aggregate metrics per customer classification.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use medsupply_types::{Classification, ClassificationMetrics, Customer, SalesOrder};

use crate::rounding::{percent_one_decimal, round_half_up_dp};

#[derive(Default)]
struct Accumulator {
    customers: u32,
    orders: u32,
    revenue: Decimal,
}

/// One [`ClassificationMetrics`] per classification, in declaration order.
///
/// Orders are attributed by the classification stamped on the order, not by
/// the customer's current classification. Cancelled orders are ignored.
pub fn classification_metrics(
    customers: &[Customer],
    orders: &[SalesOrder],
) -> Vec<ClassificationMetrics> {
    let mut acc: BTreeMap<Classification, Accumulator> = BTreeMap::new();

    for customer in customers {
        let entry = acc.entry(customer.classification).or_default();
        entry.customers = entry.customers.saturating_add(1);
    }

    let mut total_revenue = Decimal::ZERO;
    for order in orders.iter().filter(|o| o.is_revenue()) {
        let entry = acc.entry(order.classification).or_default();
        entry.orders = entry.orders.saturating_add(1);
        entry.revenue = entry.revenue.saturating_add(order.total);
        total_revenue = total_revenue.saturating_add(order.total);
    }

    Classification::ALL
        .iter()
        .map(|classification| {
            let (customers_count, orders_count, revenue) = acc
                .get(classification)
                .map_or((0, 0, Decimal::ZERO), |a| (a.customers, a.orders, a.revenue));
            let average_order_value = if orders_count == 0 {
                Decimal::ZERO
            } else {
                revenue
                    .checked_div(Decimal::from(orders_count))
                    .map_or(Decimal::ZERO, |avg| round_half_up_dp(avg, 2))
            };
            ClassificationMetrics {
                classification: *classification,
                customers_count,
                orders_count,
                revenue,
                average_order_value,
                revenue_share_pct: percent_one_decimal(revenue, total_revenue),
            }
        })
        .collect()
}
