//! REST API endpoint handlers for the dashboard server.
//!
//! All handlers read from or write to the [`Workspace`] held in the shared
//! [`AppState`]. KPI endpoints recompute on every request.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | HTML dashboard |
//! | `GET` | `/api/overview` | Headline figures |
//! | `GET` | `/api/kpis/branches` | Branch KPIs and allocation drift |
//! | `GET` | `/api/kpis/classifications` | Per-classification metrics |
//! | `GET` | `/api/{screen}` | Search, filter, sort, page |
//! | `POST` | `/api/{screen}` | Create a record |
//! | `GET` | `/api/{screen}/{id}` | One record |
//! | `PUT` | `/api/{screen}/{id}` | Replace a record |
//! | `DELETE` | `/api/{screen}/{id}` | Delete a record |
//! | `POST` | `/api/reset` | Discard every edit |
//!
//! [`Workspace`]: medsupply_store::Workspace
//! [`AppState`]: crate::state::AppState

pub mod index;
pub mod kpis;
pub mod records;

pub use index::index;
pub use kpis::{branch_kpis, classification_kpis, overview};
pub use records::{create_record, delete_record, get_record, list_records, reset, update_record};
