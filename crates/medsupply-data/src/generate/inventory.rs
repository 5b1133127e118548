use rust_decimal::Decimal;

use medsupply_types::{Branch, InventoryItem, InventoryItemId, Supplier, SupplierId};

use super::{days_after, seed_index};
use crate::catalog::{PRODUCTS, Product};
use crate::config::SeedConfig;
use crate::hash::{mix, mix_range};

/// Retail markup over landed cost: 35 %.
const MARKUP_PERCENT: i64 = 135;

/// Generate `config.inventory_items` items, each linked to a supplier of
/// the same category when one exists.
///
/// Every seventeenth item is out of stock and every fifth is below its
/// reorder level, so the low-stock widgets always have something to show.
pub fn inventory(config: &SeedConfig, suppliers: &[Supplier]) -> Vec<InventoryItem> {
    let products_len = PRODUCTS.len();
    (0..config.inventory_items)
        .filter_map(|i| {
            let product = PRODUCTS.get(i.checked_rem(products_len)?).copied()?;
            let round = i.checked_div(products_len)?;
            Some(item(seed_index(i), i, round, product, config, suppliers))
        })
        .collect()
}

fn item(
    n: u64,
    i: usize,
    round: usize,
    product: Product,
    config: &SeedConfig,
    suppliers: &[Supplier],
) -> InventoryItem {
    // Spread the same product across branches on successive rounds.
    let branch = Branch::from_index(i.saturating_add(round));
    let reorder_level = u32::try_from(mix_range(n, 31, 20, 60)).unwrap_or(20);
    let current_stock = if n % 17 == 16 {
        0
    } else if n % 5 == 4 {
        u32::try_from(mix_range(n, 32, 1, u64::from(reorder_level))).unwrap_or(1)
    } else {
        u32::try_from(mix_range(n, 32, u64::from(reorder_level).saturating_add(1), 600)).unwrap_or(100)
    };

    // +/- 10 % around the catalog cost.
    let cost_pct = i64::try_from(mix_range(n, 33, 90, 110)).unwrap_or(100);
    let unit_cost = Decimal::new(product.base_cost.saturating_mul(cost_pct), 4).round_dp(2);
    let unit_price = Decimal::new(
        product
            .base_cost
            .saturating_mul(cost_pct)
            .saturating_mul(MARKUP_PERCENT),
        6,
    )
    .round_dp(2);

    InventoryItem {
        id: InventoryItemId::seeded(n),
        sku: format!("SKU-{}-{:04}", product.category.variant_name().to_uppercase(), n.saturating_add(1)),
        name: product.name.to_owned(),
        category: product.category,
        branch,
        supplier_id: supplier_for(n, product, suppliers),
        current_stock,
        reorder_level,
        unit_cost,
        unit_price,
        expiry_date: days_after(config.reference_date, mix_range(n, 34, 60, 900)),
    }
}

fn supplier_for(n: u64, product: Product, suppliers: &[Supplier]) -> SupplierId {
    let matching: Vec<&Supplier> = suppliers
        .iter()
        .filter(|s| s.category == product.category)
        .collect();
    let pool: Vec<&Supplier> = if matching.is_empty() {
        suppliers.iter().collect()
    } else {
        matching
    };
    let len = u64::try_from(pool.len()).unwrap_or(0);
    if len == 0 {
        return SupplierId::seeded(0);
    }
    mix(n, 35)
        .checked_rem(len)
        .and_then(|idx| usize::try_from(idx).ok())
        .and_then(|idx| pool.get(idx))
        .map_or_else(|| SupplierId::seeded(0), |s| s.id)
}
