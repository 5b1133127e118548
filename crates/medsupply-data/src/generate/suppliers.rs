use medsupply_types::{Branch, ProductCategory, Supplier, SupplierId, SupplierStatus};

use super::{riyals, seed_index};
use crate::catalog::SUPPLIERS;
use crate::config::SeedConfig;
use crate::derived::supplier_rating;
use crate::hash::mix_range;

const PAYMENT_TERMS: [u32; 4] = [30, 45, 60, 90];

/// Generate `config.suppliers` suppliers.
///
/// Categories cycle so every category has a supplier once there are at
/// least six. The rating is derived from the supplier name, so two
/// branches of the same company share a rating.
pub fn suppliers(config: &SeedConfig) -> Vec<Supplier> {
    (0..config.suppliers)
        .map(|i| {
            let n = seed_index(i);
            let catalog_len = SUPPLIERS.len();
            let (company, country) = i
                .checked_rem(catalog_len)
                .and_then(|c| SUPPLIERS.get(c))
                .copied()
                .unwrap_or(("Medline Industries", "USA"));
            let round = i.checked_div(catalog_len).unwrap_or(0);
            let name = if round == 0 {
                company.to_owned()
            } else {
                format!("{company} ({})", Branch::from_index(round).english_name())
            };
            let rating = supplier_rating(&name);
            let category = i
                .checked_rem(ProductCategory::ALL.len())
                .and_then(|c| ProductCategory::ALL.get(c))
                .copied()
                .unwrap_or(ProductCategory::Consumables);

            Supplier {
                id: SupplierId::seeded(n),
                code: format!("SUP-{:03}", n.saturating_add(1)),
                name,
                country: country.to_owned(),
                category,
                branch: Branch::from_index(i),
                rating,
                payment_terms_days: PAYMENT_TERMS.get(i % 4).copied().unwrap_or(30),
                total_purchases: riyals(mix_range(n, 21, 50_000, 2_500_000)),
                outstanding_balance: riyals(mix_range(n, 22, 0, 250_000)),
                status: if rating <= 1 {
                    SupplierStatus::Suspended
                } else {
                    SupplierStatus::Active
                },
            }
        })
        .collect()
}
