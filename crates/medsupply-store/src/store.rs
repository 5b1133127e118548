//! A single editable array.

use tracing::{info, warn};

use crate::action::{Action, reduce};
use crate::error::StoreError;
use crate::record::{Record, Validate};

/// Owns the current array for one screen and applies actions to it.
///
/// Each successful [`dispatch`](Self::dispatch) swaps in the array produced
/// by [`reduce`]; a failed one leaves the current array unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store<T> {
    items: Vec<T>,
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record + Validate> Store<T> {
    /// Start from a copy of `items`.
    pub const fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Apply `action` and return the id of the record it targeted.
    pub fn dispatch(&mut self, action: Action<T>) -> Result<T::Id, StoreError> {
        let name = action.name();
        let id = action.target();
        match reduce(&self.items, action) {
            Ok(next) => {
                self.items = next;
                info!(entity = T::KIND, action = name, %id, count = self.items.len(), "Store updated");
                Ok(id)
            }
            Err(e) => {
                warn!(entity = T::KIND, action = name, %id, error = %e, "Store action rejected");
                Err(e)
            }
        }
    }

    /// Discard every edit and start again from `items`.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// The current array.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The record with `id`, if present.
    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the array is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
