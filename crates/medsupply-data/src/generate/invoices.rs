use rust_decimal::Decimal;

use medsupply_types::{Invoice, InvoiceId, InvoiceStatus, SalesOrder};

use super::{days_after, seed_index};
use crate::config::SeedConfig;
use crate::hash::mix_range;
use medsupply_kpi::rounding::round_half_up_dp;

/// Days between issue and due date.
pub const PAYMENT_TERMS_DAYS: u64 = 30;

/// Generate up to `config.invoices` invoices, one per non-cancelled order.
///
/// Unpaid invoices whose due date is before the reference date are
/// `Overdue`; the rest of the unpaid ones are `Unpaid`.
pub fn invoices(config: &SeedConfig, orders: &[SalesOrder]) -> Vec<Invoice> {
    orders
        .iter()
        .filter(|o| o.is_revenue())
        .take(config.invoices)
        .enumerate()
        .map(|(i, order)| invoice(seed_index(i), order, config))
        .collect()
}

fn invoice(n: u64, order: &SalesOrder, config: &SeedConfig) -> Invoice {
    let issue_date = order.order_date;
    let due_date = days_after(issue_date, PAYMENT_TERMS_DAYS);
    let amount = order.total;

    let roll = mix_range(n, 51, 0, 99);
    let (paid_amount, settled) = match roll {
        0..=54 => (amount, true),
        55..=74 => {
            let pct = Decimal::from(mix_range(n, 52, 20, 80));
            let paid = amount
                .saturating_mul(pct)
                .checked_div(Decimal::ONE_HUNDRED)
                .map_or(Decimal::ZERO, |p| round_half_up_dp(p, 2));
            (paid, false)
        }
        _ => (Decimal::ZERO, false),
    };

    let status = if settled {
        InvoiceStatus::Paid
    } else if due_date < config.reference_date {
        InvoiceStatus::Overdue
    } else if paid_amount.is_zero() {
        InvoiceStatus::Unpaid
    } else {
        InvoiceStatus::Partial
    };

    Invoice {
        id: InvoiceId::seeded(n),
        invoice_number: format!("INV-{}-{:04}", issue_date.format("%Y"), n.saturating_add(1)),
        customer_id: order.customer_id,
        customer_name: order.customer_name.clone(),
        branch: order.branch,
        issue_date,
        due_date,
        amount,
        paid_amount,
        status,
    }
}
