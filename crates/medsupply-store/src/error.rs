//! Error types for the medsupply-store crate.
//!
//! Reducers never panic: a create that would duplicate an id, an update or
//! delete of an unknown id, and a record that fails validation are all
//! returned as [`StoreError`]. Malformed list queries are [`QueryError`].

/// Errors returned when an action cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No record with the given id exists.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Record kind, e.g. `customer`.
        kind: &'static str,
        /// The id that was looked up.
        id: String,
    },

    /// A record with the given id already exists.
    #[error("duplicate {kind} id: {id}")]
    DuplicateId {
        /// Record kind.
        kind: &'static str,
        /// The conflicting id.
        id: String,
    },

    /// The record failed validation.
    #[error("invalid {kind}: {field} {reason}")]
    Invalid {
        /// Record kind.
        kind: &'static str,
        /// Offending field name.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Errors returned when a list query cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The branch filter is not one of the four branches.
    #[error("unknown branch: {0}")]
    UnknownBranch(String),

    /// The classification filter is not a known classification.
    #[error("unknown classification: {0}")]
    UnknownClassification(String),

    /// The sort field is not sortable for this screen.
    #[error("cannot sort {kind} by {field}")]
    UnknownSortField {
        /// Record kind.
        kind: &'static str,
        /// The requested field.
        field: String,
    },

    /// Pages are numbered from 1.
    #[error("page must be at least 1")]
    PageOutOfRange,
}
