//! Dashboard API server for the MedSupply distribution dashboard.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **HTML dashboard** (`GET /`) with headline figures, one KPI card per
//!   branch and the classification table
//! - **KPI endpoints** for branch KPIs, classification metrics and the
//!   overview, recomputed on every request
//! - **Screen endpoints** to search, filter, sort, page, create, update
//!   and delete records on each of the seven screens
//!
//! # Architecture
//!
//! The binary seeds one [`Repository`](medsupply_data::Repository) at
//! startup and wraps it in an [`AppState`]. Handlers edit a
//! [`Workspace`](medsupply_store::Workspace) copy held behind a
//! read-write lock; nothing is persisted, so a restart or
//! `POST /api/reset` restores the seeded data.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use config::{AppConfig, ConfigError};
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
