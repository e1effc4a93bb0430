//! Process-wide bundle of the six entity stores.
//!
//! Constructed once at bootstrap and shared by `Arc`; handlers receive
//! the individual stores they need, not the whole bundle. There are no
//! process-global maps anywhere: every store reference is threaded
//! through this type.

use std::sync::Arc;

use crate::adapters::memory::InMemoryStore;
use crate::domain::adoption::AdoptionRequest;
use crate::domain::care_event::PetCareEvent;
use crate::domain::donation::Donation;
use crate::domain::feedback::Feedback;
use crate::domain::pet::Pet;
use crate::domain::user::User;
use crate::ports::DynRecordStore;

/// One store per entity type, all behind the `RecordStore` port.
#[derive(Clone)]
pub struct Store {
    pub users: DynRecordStore<User>,
    pub pets: DynRecordStore<Pet>,
    pub adoptions: DynRecordStore<AdoptionRequest>,
    pub care_events: DynRecordStore<PetCareEvent>,
    pub feedback: DynRecordStore<Feedback>,
    pub donations: DynRecordStore<Donation>,
}

impl Store {
    /// Builds the bundle over fresh in-memory stores.
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryStore::new()),
            pets: Arc::new(InMemoryStore::new()),
            adoptions: Arc::new(InMemoryStore::new()),
            care_events: Arc::new(InMemoryStore::new()),
            feedback: Arc::new(InMemoryStore::new()),
            donations: Arc::new(InMemoryStore::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{PetId, UserId};

    #[tokio::test]
    async fn stores_start_empty() {
        let store = Store::in_memory();
        assert_eq!(store.users.len().await.unwrap(), 0);
        assert_eq!(store.pets.len().await.unwrap(), 0);
        assert_eq!(store.adoptions.len().await.unwrap(), 0);
        assert_eq!(store.care_events.len().await.unwrap(), 0);
        assert_eq!(store.feedback.len().await.unwrap(), 0);
        assert_eq!(store.donations.len().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn stores_are_independent() {
        let store = Store::in_memory();
        let pet = Pet::new(
            PetId::new(),
            UserId::new(),
            "Biscuit".to_string(),
            "dog".to_string(),
            "beagle".to_string(),
            3,
            "Friendly".to_string(),
        )
        .unwrap();

        store.pets.insert(pet).await.unwrap();

        assert_eq!(store.pets.len().await.unwrap(), 1);
        assert_eq!(store.users.len().await.unwrap(), 0);
    }

    #[test]
    fn store_is_clone_and_send_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<Store>();
    }
}
