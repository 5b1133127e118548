//! Editable stores for the MedSupply dashboard screens.
//!
//! The seeded [`Repository`](medsupply_data::Repository) is read-only. Each
//! screen edits its own copy through a [`Store`], which applies explicit
//! [`Action`]s with the pure [`reduce`] function and swaps in the resulting
//! array. Nothing here is persisted; a [`Workspace::reset`] or a restart
//! throws every edit away.
//!
//! # Modules
//!
//! - [`record`] -- [`Record`] identity and [`Validate`].
//! - [`action`] -- [`Action`] and [`reduce`].
//! - [`store`] -- [`Store`].
//! - [`query`] -- [`ListQuery`] search, filter, sort and paging.
//! - [`entities`] -- the trait impls for every entity.
//! - [`workspace`] -- [`Workspace`] and [`Collection`].
//! - [`error`] -- [`StoreError`] and [`QueryError`].

pub mod action;
pub mod entities;
pub mod error;
pub mod query;
pub mod record;
pub mod store;
pub mod workspace;

pub use action::{Action, reduce};
pub use error::{QueryError, StoreError};
pub use query::{ListQuery, Listable, Page, PagingConfig, SortOrder, SortValue, Tag};
pub use record::{FieldError, Record, Validate};
pub use store::Store;
pub use workspace::{Collection, Workspace};
