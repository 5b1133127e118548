//! `GET /` -- the HTML dashboard.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;

use crate::dashboard::DashboardContext;
use crate::error::ApiError;
use crate::state::AppState;

/// Render the landing page from the current workspace.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let context = {
        let workspace = state.workspace.read().await;
        DashboardContext {
            overview: workspace.overview(),
            branches: workspace.branch_kpis(),
            classifications: workspace.classification_metrics(),
        }
    };
    state.dashboard.render(&context).map(Html)
}
