//! GetRecordHandler - generic query handler for fetching one record.

use crate::domain::foundation::{DomainError, Entity};
use crate::ports::DynRecordStore;

/// Handler for fetching a single record of any entity type.
///
/// What varies between entity types is the store it is wired to; the
/// lookup semantics (`NotFound` when absent) are identical everywhere.
pub struct GetRecordHandler<T: Entity> {
    store: DynRecordStore<T>,
}

impl<T: Entity> GetRecordHandler<T> {
    pub fn new(store: DynRecordStore<T>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, id: &T::Id) -> Result<T, DomainError> {
        self.store.get(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::donation::Donation;
    use crate::domain::foundation::{DonationId, ErrorCode, UserId};
    use crate::ports::RecordStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn returns_stored_record() {
        let store = Arc::new(InMemoryStore::new());
        let donation = Donation::new(DonationId::new(), UserId::new(), 2500).unwrap();
        let id = *donation.id();
        store.insert(donation.clone()).await.unwrap();

        let handler = GetRecordHandler::new(store as DynRecordStore<Donation>);
        let found = handler.handle(&id).await.unwrap();
        assert_eq!(found, donation);
    }

    #[tokio::test]
    async fn missing_record_is_not_found() {
        let store: DynRecordStore<Donation> = Arc::new(InMemoryStore::new());
        let handler = GetRecordHandler::new(store);

        let err = handler.handle(&DonationId::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.details.get("entity"), Some(&"Donation".to_string()));
    }
}
