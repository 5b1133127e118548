//! Axum router construction for the dashboard API.
//!
//! Assembles the HTML page, the KPI endpoints and one set of CRUD routes per
//! screen into a single [`Router`] with CORS and request tracing enabled.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use medsupply_types::{Customer, Employee, Expense, InventoryItem, Invoice, SalesOrder, Supplier};

use crate::error::ApiError;
use crate::handlers;
use crate::handlers::records::Resource;
use crate::state::AppState;

/// Build the complete Axum router for the dashboard server.
///
/// The router includes:
/// - `GET /` -- HTML dashboard
/// - `GET /api/overview` -- headline figures
/// - `GET /api/kpis/branches` -- branch KPIs
/// - `GET /api/kpis/classifications` -- classification metrics
/// - `GET|POST /api/{screen}` and `GET|PUT|DELETE /api/{screen}/{id}` for
///   `customers`, `suppliers`, `inventory`, `orders`, `invoices`,
///   `expenses` and `employees`
/// - `POST /api/reset` -- discard every edit
///
/// Unknown paths answer with the JSON 404 body.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/overview", get(handlers::overview))
        .route("/api/kpis/branches", get(handlers::branch_kpis))
        .route("/api/kpis/classifications", get(handlers::classification_kpis))
        .route("/api/reset", post(handlers::reset))
        .merge(screen_routes::<Customer>())
        .merge(screen_routes::<Supplier>())
        .merge(screen_routes::<InventoryItem>())
        .merge(screen_routes::<SalesOrder>())
        .merge(screen_routes::<Invoice>())
        .merge(screen_routes::<Expense>())
        .merge(screen_routes::<Employee>())
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn screen_routes<T: Resource>() -> Router<Arc<AppState>> {
    let collection = format!("/api/{}", T::SCREEN);
    let item = format!("/api/{}/{{id}}", T::SCREEN);
    Router::new()
        .route(
            &collection,
            get(handlers::list_records::<T>).post(handlers::create_record::<T>),
        )
        .route(
            &item,
            get(handlers::get_record::<T>)
                .put(handlers::update_record::<T>)
                .delete(handlers::delete_record::<T>),
        )
}

async fn not_found() -> ApiError {
    ApiError::NotFound(String::from("no such endpoint"))
}
