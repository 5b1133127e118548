use rust_decimal::Decimal;

use medsupply_types::{Branch, Classification, Customer, CustomerId, CustomerType};

use super::{days_before, person_name, phone, riyals, seed_index};
use crate::catalog::{FACILITY_NAMES, facility_prefix, facility_slug};
use crate::config::SeedConfig;
use crate::derived::account_manager;
use crate::hash::{mix_pick, mix_range};

/// Classification by position in a repeating block of ten accounts:
/// one VIP, two High Value, one Risk, six Regular.
const fn classification_for(index: u64) -> Classification {
    match index % 10 {
        0 => Classification::Vip,
        3 | 7 => Classification::HighValue,
        9 => Classification::Risk,
        _ => Classification::Regular,
    }
}

/// Purchase volume multiplier per classification.
const fn volume_factor(classification: Classification) -> u64 {
    match classification {
        Classification::Vip => 5,
        Classification::HighValue => 3,
        Classification::Regular | Classification::Risk => 1,
    }
}

/// Generate `config.customers` customers.
pub fn customers(config: &SeedConfig) -> Vec<Customer> {
    (0..config.customers)
        .map(|i| customer(seed_index(i), i, config))
        .collect()
}

fn customer(n: u64, i: usize, config: &SeedConfig) -> Customer {
    let code = format!("CUS-{:04}", n.saturating_add(1));
    let customer_type = mix_pick(n, 11, CustomerType::ALL).unwrap_or(CustomerType::Clinic);
    let facility = mix_pick(n, 12, FACILITY_NAMES).unwrap_or("النور");
    let classification = classification_for(n);

    let total_purchases =
        riyals(mix_range(n, 13, 20_000, 400_000).saturating_mul(volume_factor(classification)));
    let credit_limit = riyals(mix_range(n, 14, 2, 10).saturating_mul(50_000));
    let balance = if classification == Classification::Risk {
        // Risk accounts sit above their limit.
        credit_limit.saturating_add(riyals(mix_range(n, 15, 5_000, 60_000)))
    } else {
        credit_limit
            .saturating_mul(Decimal::from(mix_range(n, 15, 0, 80)))
            .checked_div(Decimal::ONE_HUNDRED)
            .unwrap_or(Decimal::ZERO)
    };

    Customer {
        id: CustomerId::seeded(n),
        name: format!("{} {facility}", facility_prefix(customer_type)),
        contact_person: person_name(n, 16),
        phone: phone(n, 17),
        email: format!("procurement{}@{}.sa", n.saturating_add(1), facility_slug(customer_type)),
        branch: Branch::from_index(i),
        customer_type,
        classification,
        credit_limit,
        balance,
        total_purchases,
        account_manager: account_manager(&code),
        registered_on: days_before(config.reference_date, mix_range(n, 18, 30, 1_500)),
        active: classification != Classification::Risk || n % 3 != 0,
        code,
    }
}
