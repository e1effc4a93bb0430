//! RemoveRecordHandler - generic command handler for deleting a record.
//!
//! Deletion never cascades: records referencing the removed one keep
//! their (now dangling) ids. Reference checks happen at write time
//! only.

use crate::domain::foundation::{DomainError, Entity};
use crate::ports::DynRecordStore;

/// Handler for removing a single record of any entity type.
pub struct RemoveRecordHandler<T: Entity> {
    store: DynRecordStore<T>,
}

impl<T: Entity> RemoveRecordHandler<T> {
    pub fn new(store: DynRecordStore<T>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, id: &T::Id) -> Result<(), DomainError> {
        self.store.remove(id).await
    }
}
