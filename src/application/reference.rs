//! Cross-entity reference checks.
//!
//! Every foreign-key field is validated through `require_exists` before
//! the referencing record is persisted. The error carries the FIELD
//! name (`owner_id`, `adopter_id`, ...), not the entity kind, so API
//! clients learn which part of their payload was wrong.

use crate::domain::foundation::{DomainError, Entity};
use crate::ports::RecordStore;

/// Resolves a referenced record or fails with `InvalidReference`.
///
/// # Errors
///
/// - `InvalidReference` (with the field name) if no record has the id
pub async fn require_exists<T: Entity>(
    store: &dyn RecordStore<T>,
    id: &T::Id,
    field: &str,
) -> Result<T, DomainError> {
    store
        .find(id)
        .await?
        .ok_or_else(|| DomainError::invalid_reference(field, id))
}
