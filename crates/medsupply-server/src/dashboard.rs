//! HTML dashboard rendering via `minijinja`.
//!
//! The landing page template is compiled into the binary and rendered
//! from a [`DashboardContext`] built out of the current workspace: the
//! headline figures, one KPI card per branch and the classification table.

use minijinja::value::Value;
use minijinja::{Environment, context};
use rust_decimal::Decimal;
use serde::Serialize;

use medsupply_kpi::BranchKpiReport;
use medsupply_kpi::rounding::round_half_up;
use medsupply_types::{ClassificationMetrics, DashboardOverview};

use crate::error::ApiError;

const DASHBOARD_TEMPLATE: &str = include_str!("../templates/dashboard.html");

/// Everything the landing page shows.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardContext {
    /// Company-wide headline figures.
    pub overview: DashboardOverview,
    /// Per-branch KPIs and allocation drift.
    pub branches: BranchKpiReport,
    /// Per-classification metrics.
    pub classifications: Vec<ClassificationMetrics>,
}

/// Wraps a `minijinja` [`Environment`] with the dashboard template loaded.
pub struct Dashboard {
    env: Environment<'static>,
}

impl core::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dashboard").finish_non_exhaustive()
    }
}

impl Dashboard {
    /// Compile the dashboard template and register its filters.
    pub fn new() -> Result<Self, ApiError> {
        let mut env = Environment::new();
        env.add_filter("money", money);
        env.add_template("dashboard", DASHBOARD_TEMPLATE)
            .map_err(|e| ApiError::Template(format!("failed to add dashboard template: {e}")))?;
        Ok(Self { env })
    }

    /// Render the landing page.
    pub fn render(&self, data: &DashboardContext) -> Result<String, ApiError> {
        let template = self.env.get_template("dashboard")?;
        let rendered = template
            .render(context! {
                overview => &data.overview,
                branches => &data.branches.kpis,
                allocation_drift => data.branches.allocation_drift,
                has_drift => !data.branches.allocation_drift.is_zero(),
                classifications => &data.classifications,
            })
            .map_err(|e| ApiError::Template(format!("dashboard render failed: {e}")))?;
        Ok(rendered)
    }
}

/// Template filter: whole riyals with thousands separators.
///
/// Accepts decimals serialized as strings or numbers; anything else is
/// printed unchanged.
fn money(value: &Value) -> String {
    let raw = value.to_string();
    raw.parse::<Decimal>()
        .map_or(raw, |amount| group_thousands(round_half_up(amount)))
}

fn group_thousands(amount: Decimal) -> String {
    let digits = amount.abs().trunc().to_string();
    let len = digits.chars().count();
    let mut out = String::with_capacity(len.saturating_add(len / 3).saturating_add(1));
    if amount.is_sign_negative() && !amount.is_zero() {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && len.saturating_sub(i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use medsupply_data::{Repository, SeedConfig};

    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(dec!(0)), "0");
        assert_eq!(group_thousands(dec!(999)), "999");
        assert_eq!(group_thousands(dec!(1000)), "1,000");
        assert_eq!(group_thousands(dec!(1234567)), "1,234,567");
        assert_eq!(group_thousands(dec!(-50000)), "-50,000");
    }

    #[test]
    fn money_filter_rounds_half_up() {
        assert_eq!(money(&Value::from("1234.5")), "1,235");
        assert_eq!(money(&Value::from("n/a")), "n/a");
        assert_eq!(money(&Value::from(2500)), "2,500");
    }

    #[test]
    fn renders_every_branch() {
        let repo = Repository::seeded(&SeedConfig {
            customers: 12,
            sales_orders: 20,
            ..SeedConfig::default()
        });
        let html = Dashboard::new()
            .unwrap()
            .render(&DashboardContext {
                overview: repo.overview(),
                branches: repo.branch_kpis(),
                classifications: repo.classification_metrics(),
            })
            .unwrap();
        for branch in ["الرياض", "جدة", "الدمام", "مكة"] {
            assert!(html.contains(branch), "missing {branch}");
        }
        assert!(html.contains("VIP"));
    }
}
