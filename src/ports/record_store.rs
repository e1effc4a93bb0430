//! Record store port for persistence operations.
//!
//! This module provides the generic `RecordStore<T>` trait that defines
//! the standard keyed-record interface for every entity store.
//!
//! # DRY Pattern
//!
//! Instead of each entity defining its own store trait with identical
//! `insert`, `get`, `update`, `remove`, `list` signatures, all six stores
//! share this one trait, keyed by the entity's `Entity::Id`.
//!
//! # Example
//!
//! ```ignore
//! // A service holds stores as trait objects
//! pub struct PetService {
//!     pets: Arc<dyn RecordStore<Pet>>,
//!     users: Arc<dyn RecordStore<User>>,
//! }
//! ```

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, Entity};

/// Convenience alias for a shared store trait object.
pub type DynRecordStore<T> = Arc<dyn RecordStore<T>>;

/// Base trait for keyed record stores.
///
/// # Ordering
///
/// `list` returns records in insertion order: the order in which
/// successful `insert` calls happened, regardless of key values or
/// later updates.
///
/// # Error Handling
///
/// All methods return `Result<_, DomainError>`. Implementations convert
/// adapter-specific failures into `StorageError`; the key-collision and
/// missing-key cases use `DuplicateKey` and `NotFound` so callers can
/// branch on `ErrorCode`.
#[async_trait]
pub trait RecordStore<T: Entity>: Send + Sync {
    /// Adds a new record under its own id.
    ///
    /// # Errors
    ///
    /// - `DuplicateKey` if a record with the same id is already stored
    async fn insert(&self, record: T) -> Result<(), DomainError>;

    /// Finds a record by id.
    ///
    /// Returns `Ok(None)` if the record doesn't exist.
    /// Returns `Err` only for infrastructure failures.
    async fn find(&self, id: &T::Id) -> Result<Option<T>, DomainError>;

    /// Replaces an existing record wholesale.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no record with the id exists
    async fn update(&self, record: T) -> Result<(), DomainError>;

    /// Deletes a record by id.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no record with the id exists
    async fn remove(&self, id: &T::Id) -> Result<(), DomainError>;

    /// Returns all records in insertion order.
    async fn list(&self) -> Result<Vec<T>, DomainError>;

    /// Returns the number of stored records.
    async fn len(&self) -> Result<usize, DomainError>;

    /// Finds a record by id, failing with `NotFound` when absent.
    ///
    /// Default implementation uses `find`. This is the right call for
    /// code paths where a missing record is an error, not a branch.
    async fn get(&self, id: &T::Id) -> Result<T, DomainError> {
        self.find(id)
            .await?
            .ok_or_else(|| DomainError::not_found(T::KIND, id))
    }

    /// Checks if a record with the given id exists.
    ///
    /// Default implementation uses `find`. Override if a more efficient
    /// check is available.
    async fn contains(&self, id: &T::Id) -> Result<bool, DomainError> {
        Ok(self.find(id).await?.is_some())
    }
}
