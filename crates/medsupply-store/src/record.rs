//! Record identity and validation.

use core::fmt::{Debug, Display};

use uuid::Uuid;

/// A row in one of the editable arrays.
pub trait Record: Clone + Debug {
    /// Identifier type.
    type Id: Copy + Eq + Debug + Display + From<Uuid> + Send + Sync + 'static;

    /// Lower-case record kind used in logs and error messages.
    const KIND: &'static str;

    /// The record's identifier.
    fn id(&self) -> Self::Id;

    /// Overwrite the record's identifier.
    fn set_id(&mut self, id: Self::Id);

    /// Recompute fields derived from the record's identity.
    ///
    /// Called on every create and update before validation, so a client
    /// can neither set these fields nor leave them stale after a rename.
    fn refresh_derived(&mut self) {}

    /// Record kind; same as [`Self::KIND`].
    fn kind(&self) -> &'static str {
        Self::KIND
    }
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Offending field.
    pub field: &'static str,
    /// What is wrong with it.
    pub reason: String,
}

impl FieldError {
    /// Build a failure for `field`.
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Checks a record before it is created or updated.
pub trait Validate {
    /// `Ok(())` when the record is acceptable, otherwise the first failure.
    fn validate(&self) -> Result<(), FieldError>;
}

/// Reject blank text.
pub(crate) fn non_empty(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::new(field, "must not be empty"))
    } else {
        Ok(())
    }
}

/// Reject negative money.
pub(crate) fn non_negative(
    field: &'static str,
    value: rust_decimal::Decimal,
) -> Result<(), FieldError> {
    if value.is_sign_negative() && !value.is_zero() {
        Err(FieldError::new(field, "must not be negative"))
    } else {
        Ok(())
    }
}
