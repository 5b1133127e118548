//! Actions and the pure reducer that applies them.
//!
//! Every edit is expressed as an [`Action`] and applied by [`reduce`],
//! which returns a brand-new array rather than patching the old one in
//! place. A failed action leaves the caller's array untouched.

use crate::error::StoreError;
use crate::record::{Record, Validate};

/// An edit to one array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action<T: Record> {
    /// Append a new record.
    Create(T),
    /// Replace the record with the same id.
    Update(T),
    /// Remove the record with this id.
    Delete(T::Id),
}

impl<T: Record> Action<T> {
    /// Action name used in logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::Update(_) => "update",
            Self::Delete(_) => "delete",
        }
    }

    /// Id of the record the action targets.
    pub fn target(&self) -> T::Id {
        match self {
            Self::Create(record) | Self::Update(record) => record.id(),
            Self::Delete(id) => *id,
        }
    }
}

/// Apply `action` to `items`, returning the replacement array.
///
/// - `Create` rejects an id that is already present and appends otherwise.
/// - `Update` replaces the record in place, keeping its position.
/// - `Delete` removes the record, keeping the order of the rest.
///
/// `Create` and `Update` refresh the identity-derived fields and validate
/// the record first.
pub fn reduce<T>(items: &[T], action: Action<T>) -> Result<Vec<T>, StoreError>
where
    T: Record + Validate,
{
    match action {
        Action::Create(mut record) => {
            record.refresh_derived();
            check(&record)?;
            let id = record.id();
            if items.iter().any(|existing| existing.id() == id) {
                return Err(StoreError::DuplicateId {
                    kind: T::KIND,
                    id: id.to_string(),
                });
            }
            let mut next = Vec::with_capacity(items.len().saturating_add(1));
            next.extend_from_slice(items);
            next.push(record);
            Ok(next)
        }
        Action::Update(mut record) => {
            record.refresh_derived();
            check(&record)?;
            let id = record.id();
            let position = find(items, id)?;
            Ok(items
                .iter()
                .enumerate()
                .map(|(i, existing)| {
                    if i == position {
                        record.clone()
                    } else {
                        existing.clone()
                    }
                })
                .collect())
        }
        Action::Delete(id) => {
            find(items, id)?;
            Ok(items
                .iter()
                .filter(|existing| existing.id() != id)
                .cloned()
                .collect())
        }
    }
}

fn check<T: Record + Validate>(record: &T) -> Result<(), StoreError> {
    record.validate().map_err(|e| StoreError::Invalid {
        kind: T::KIND,
        field: e.field,
        reason: e.reason,
    })
}

fn find<T: Record>(items: &[T], id: T::Id) -> Result<usize, StoreError> {
    items
        .iter()
        .position(|existing| existing.id() == id)
        .ok_or_else(|| StoreError::NotFound {
            kind: T::KIND,
            id: id.to_string(),
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::record::FieldError;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct NoteId(u128);

    impl core::fmt::Display for NoteId {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl From<Uuid> for NoteId {
        fn from(id: Uuid) -> Self {
            Self(id.as_u128())
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Note {
        id: NoteId,
        text: &'static str,
    }

    impl Record for Note {
        type Id = NoteId;
        const KIND: &'static str = "note";

        fn id(&self) -> NoteId {
            self.id
        }

        fn set_id(&mut self, id: NoteId) {
            self.id = id;
        }
    }

    impl Validate for Note {
        fn validate(&self) -> Result<(), FieldError> {
            crate::record::non_empty("text", self.text)
        }
    }

    fn note(id: u128, text: &'static str) -> Note {
        Note {
            id: NoteId(id),
            text,
        }
    }

    #[test]
    fn create_appends() {
        let items = vec![note(1, "a")];
        let next = reduce(&items, Action::Create(note(2, "b"))).unwrap();
        assert_eq!(next, vec![note(1, "a"), note(2, "b")]);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn create_rejects_duplicate_id() {
        let items = vec![note(1, "a")];
        let err = reduce(&items, Action::Create(note(1, "b"))).unwrap_err();
        assert_eq!(
            err,
            StoreError::DuplicateId {
                kind: "note",
                id: String::from("1")
            }
        );
    }

    #[test]
    fn update_keeps_position() {
        let items = vec![note(1, "a"), note(2, "b"), note(3, "c")];
        let next = reduce(&items, Action::Update(note(2, "B"))).unwrap();
        assert_eq!(next, vec![note(1, "a"), note(2, "B"), note(3, "c")]);
    }

    #[test]
    fn update_unknown_is_not_found() {
        let err = reduce(&[note(1, "a")], Action::Update(note(9, "x"))).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { kind: "note", .. }));
    }

    #[test]
    fn delete_removes_only_target() {
        let items = vec![note(1, "a"), note(2, "b"), note(3, "c")];
        let next = reduce(&items, Action::Delete(NoteId(2))).unwrap();
        assert_eq!(next, vec![note(1, "a"), note(3, "c")]);
        assert!(reduce(&next, Action::Delete(NoteId(2))).is_err());
    }

    #[test]
    fn invalid_record_is_rejected() {
        let err = reduce(&[], Action::Create(note(1, "  "))).unwrap_err();
        assert!(matches!(err, StoreError::Invalid { field: "text", .. }));
    }

    #[test]
    fn action_metadata() {
        let action: Action<Note> = Action::Delete(NoteId(7));
        assert_eq!(action.name(), "delete");
        assert_eq!(action.target(), NoteId(7));
    }
}
