//! KPI and overview endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use medsupply_kpi::BranchKpiReport;
use medsupply_types::{ClassificationMetrics, DashboardOverview};

use crate::state::AppState;

/// `GET /api/overview`
pub async fn overview(State(state): State<Arc<AppState>>) -> Json<DashboardOverview> {
    Json(state.workspace.read().await.overview())
}

/// `GET /api/kpis/branches`
///
/// One record per branch plus the per-branch allocated expenses and the
/// unreconciled `allocationDrift`.
pub async fn branch_kpis(State(state): State<Arc<AppState>>) -> Json<BranchKpiReport> {
    Json(state.workspace.read().await.branch_kpis())
}

/// `GET /api/kpis/classifications`
pub async fn classification_kpis(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<ClassificationMetrics>> {
    Json(state.workspace.read().await.classification_metrics())
}
