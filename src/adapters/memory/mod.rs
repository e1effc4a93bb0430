//! In-Memory Record Store Adapter
//!
//! Keeps every entity store in process memory. This is the platform's
//! storage substrate for development, tests, and single-node deploys.
//!
//! # Ordering
//!
//! A `Vec` of ids rides alongside the `HashMap` so `list` can return
//! records in insertion order; both live behind one lock and are
//! updated together.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, Entity};
use crate::ports::RecordStore;

struct Inner<T: Entity> {
    records: HashMap<T::Id, T>,
    order: Vec<T::Id>,
}

/// In-memory store for one entity type.
#[derive(Clone)]
pub struct InMemoryStore<T: Entity> {
    inner: Arc<RwLock<Inner<T>>>,
}

impl<T: Entity> InMemoryStore<T> {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                records: HashMap::new(),
                order: Vec::new(),
            })),
        }
    }

    /// Clear all stored records (useful for tests).
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        inner.records.clear();
        inner.order.clear();
    }
}

impl<T: Entity> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> RecordStore<T> for InMemoryStore<T> {
    async fn insert(&self, record: T) -> Result<(), DomainError> {
        let id = *record.entity_id();
        let mut inner = self.inner.write().await;
        if inner.records.contains_key(&id) {
            return Err(DomainError::duplicate_key(T::KIND, id));
        }
        inner.records.insert(id, record);
        inner.order.push(id);
        Ok(())
    }

    async fn find(&self, id: &T::Id) -> Result<Option<T>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.records.get(id).cloned())
    }

    async fn update(&self, record: T) -> Result<(), DomainError> {
        let id = *record.entity_id();
        let mut inner = self.inner.write().await;
        if !inner.records.contains_key(&id) {
            return Err(DomainError::not_found(T::KIND, id));
        }
        inner.records.insert(id, record);
        Ok(())
    }

    async fn remove(&self, id: &T::Id) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        if inner.records.remove(id).is_none() {
            return Err(DomainError::not_found(T::KIND, id));
        }
        inner.order.retain(|stored| stored != id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<T>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.records.get(id).cloned())
            .collect())
    }

    async fn len(&self) -> Result<usize, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, PetId, UserId};
    use crate::domain::pet::{Pet, PetPatch};

    fn test_pet(name: &str) -> Pet {
        Pet::new(
            PetId::new(),
            UserId::new(),
            name.to_string(),
            "dog".to_string(),
            "mixed".to_string(),
            2,
            String::new(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn insert_then_find_returns_equal_record() {
        let store = InMemoryStore::new();
        let pet = test_pet("Biscuit");
        let id = *pet.id();

        store.insert(pet.clone()).await.unwrap();

        let found = store.find(&id).await.unwrap();
        assert_eq!(found, Some(pet));
    }

    #[tokio::test]
    async fn insert_duplicate_id_fails_with_duplicate_key() {
        let store = InMemoryStore::new();
        let pet = test_pet("Biscuit");

        store.insert(pet.clone()).await.unwrap();
        let err = store.insert(pet).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::DuplicateKey);
        assert_eq!(err.details.get("entity"), Some(&"Pet".to_string()));
    }

    #[tokio::test]
    async fn get_missing_record_fails_with_not_found() {
        let store: InMemoryStore<Pet> = InMemoryStore::new();

        let err = store.get(&PetId::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn update_replaces_existing_record() {
        let store = InMemoryStore::new();
        let mut pet = test_pet("Biscuit");
        let id = *pet.id();
        store.insert(pet.clone()).await.unwrap();

        pet.apply_patch(PetPatch {
            name: Some("Waffle".to_string()),
            ..Default::default()
        })
        .unwrap();
        store.update(pet).await.unwrap();

        let found = store.get(&id).await.unwrap();
        assert_eq!(found.name(), "Waffle");
    }

    #[tokio::test]
    async fn update_missing_record_fails_with_not_found() {
        let store: InMemoryStore<Pet> = InMemoryStore::new();

        let err = store.update(test_pet("Ghost")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn remove_deletes_record() {
        let store = InMemoryStore::new();
        let pet = test_pet("Biscuit");
        let id = *pet.id();
        store.insert(pet).await.unwrap();

        store.remove(&id).await.unwrap();

        assert!(!store.contains(&id).await.unwrap());
        assert_eq!(store.len().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn remove_missing_record_fails_with_not_found() {
        let store: InMemoryStore<Pet> = InMemoryStore::new();

        let err = store.remove(&PetId::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = InMemoryStore::new();
        let first = test_pet("Alpha");
        let second = test_pet("Beta");
        let third = test_pet("Gamma");

        store.insert(first.clone()).await.unwrap();
        store.insert(second.clone()).await.unwrap();
        store.insert(third.clone()).await.unwrap();

        let names: Vec<_> = store
            .list()
            .await
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[tokio::test]
    async fn update_does_not_change_insertion_position() {
        let store = InMemoryStore::new();
        let first = test_pet("Alpha");
        let mut second = test_pet("Beta");
        store.insert(first).await.unwrap();
        store.insert(second.clone()).await.unwrap();

        second
            .apply_patch(PetPatch {
                name: Some("Beta Prime".to_string()),
                ..Default::default()
            })
            .unwrap();
        store.update(second).await.unwrap();

        let names: Vec<_> = store
            .list()
            .await
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["Alpha", "Beta Prime"]);
    }

    #[tokio::test]
    async fn remove_keeps_order_of_remaining_records() {
        let store = InMemoryStore::new();
        let first = test_pet("Alpha");
        let second = test_pet("Beta");
        let third = test_pet("Gamma");
        let second_id = *second.id();

        store.insert(first).await.unwrap();
        store.insert(second).await.unwrap();
        store.insert(third).await.unwrap();

        store.remove(&second_id).await.unwrap();

        let names: Vec<_> = store
            .list()
            .await
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["Alpha", "Gamma"]);
    }

    #[tokio::test]
    async fn clear_empties_the_store() {
        let store = InMemoryStore::new();
        store.insert(test_pet("Biscuit")).await.unwrap();
        store.insert(test_pet("Waffle")).await.unwrap();

        store.clear().await;

        assert_eq!(store.len().await.unwrap(), 0);
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn concurrent_inserts_are_all_kept() {
        let store = InMemoryStore::new();

        let mut handles = Vec::new();
        for i in 0..10 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.insert(test_pet(&format!("Pet {}", i))).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.len().await.unwrap(), 10);
        assert_eq!(store.list().await.unwrap().len(), 10);
    }
}
