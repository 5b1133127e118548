//! Shared application state for the dashboard server.
//!
//! [`AppState`] holds the seeded [`Repository`], the editable
//! [`Workspace`] copied from it, the compiled dashboard template and the
//! paging limits. The repository is never mutated; every edit goes through
//! the workspace behind a read-write lock.

use std::sync::Arc;

use tokio::sync::RwLock;

use medsupply_data::Repository;
use medsupply_store::{PagingConfig, Workspace};

use crate::dashboard::Dashboard;
use crate::error::ApiError;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Debug)]
pub struct AppState {
    /// Seeded data; the source for every reset.
    pub repository: Arc<Repository>,
    /// Current editable arrays.
    pub workspace: RwLock<Workspace>,
    /// Compiled landing page template.
    pub dashboard: Dashboard,
    /// Page size limits for list endpoints.
    pub paging: PagingConfig,
}

impl AppState {
    /// Build the state with a fresh workspace copied from `repository`.
    pub fn new(repository: Arc<Repository>, paging: PagingConfig) -> Result<Self, ApiError> {
        let workspace = Workspace::from_repository(&repository);
        Ok(Self {
            repository,
            workspace: RwLock::new(workspace),
            dashboard: Dashboard::new()?,
            paging,
        })
    }
}
