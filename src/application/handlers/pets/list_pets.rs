//! ListPetsHandler - query handler for the filtered pet listing.

use crate::application::pagination::{filter_paginate, Page, PageRequest};
use crate::domain::foundation::DomainError;
use crate::domain::pet::{Pet, PetStatus};
use crate::ports::DynRecordStore;

/// Query for a filtered, paginated pet listing.
///
/// Species matching is case-insensitive; filters apply before the
/// page is cut, so `total` counts the matching pets.
#[derive(Debug, Clone, Default)]
pub struct ListPetsQuery {
    pub species: Option<String>,
    pub status: Option<PetStatus>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl ListPetsQuery {
    fn matches(&self, pet: &Pet) -> bool {
        if let Some(species) = &self.species {
            if !pet.species().eq_ignore_ascii_case(species) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if pet.status() != status {
                return false;
            }
        }
        true
    }
}

/// Handler for listing pets.
pub struct ListPetsHandler {
    pets: DynRecordStore<Pet>,
}

impl ListPetsHandler {
    pub fn new(pets: DynRecordStore<Pet>) -> Self {
        Self { pets }
    }

    pub async fn handle(&self, query: ListPetsQuery) -> Result<Page<Pet>, DomainError> {
        let request = PageRequest::from_params(query.page, query.limit)?;
        let records = self.pets.list().await?;
        Ok(filter_paginate(records, |pet| query.matches(pet), &request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::foundation::{PetId, UserId};
    use std::sync::Arc;

    fn pet(name: &str, species: &str) -> Pet {
        Pet::new(
            PetId::new(),
            UserId::new(),
            name.to_string(),
            species.to_string(),
            "mixed".to_string(),
            4,
            String::new(),
        )
        .unwrap()
    }

    fn adopted(name: &str, species: &str) -> Pet {
        let mut p = pet(name, species);
        p.mark_adopted().unwrap();
        p
    }

    async fn handler_with(pets: Vec<Pet>) -> ListPetsHandler {
        let store: DynRecordStore<Pet> = Arc::new(InMemoryStore::new());
        for p in pets {
            store.insert(p).await.unwrap();
        }
        ListPetsHandler::new(store)
    }

    #[tokio::test]
    async fn no_filter_lists_everything() {
        let handler = handler_with(vec![pet("A", "dog"), pet("B", "cat")]).await;
        let page = handler.handle(ListPetsQuery::default()).await.unwrap();

        assert_eq!(page.total, 2);
        assert_eq!(page.items.len(), 2);
    }

    #[tokio::test]
    async fn species_filter_is_case_insensitive() {
        let handler = handler_with(vec![pet("A", "Dog"), pet("B", "cat"), pet("C", "DOG")]).await;

        let page = handler
            .handle(ListPetsQuery {
                species: Some("dog".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.total, 2);
        assert!(page.items.iter().all(|p| p.species().eq_ignore_ascii_case("dog")));
    }

    #[tokio::test]
    async fn status_filter_selects_available_pets() {
        let handler = handler_with(vec![
            pet("A", "dog"),
            adopted("B", "dog"),
            pet("C", "dog"),
        ])
        .await;

        let page = handler
            .handle(ListPetsQuery {
                status: Some(PetStatus::Available),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.total, 2);
    }

    #[tokio::test]
    async fn filter_applies_before_pagination() {
        // 25 pets; every fifth one already adopted, leaving 20 available
        let mut pets = Vec::new();
        for i in 0..25 {
            if i % 5 == 4 {
                pets.push(adopted(&format!("pet-{i}"), "dog"));
            } else {
                pets.push(pet(&format!("pet-{i}"), "dog"));
            }
        }
        let handler = handler_with(pets).await;

        let page = handler
            .handle(ListPetsQuery {
                status: Some(PetStatus::Available),
                page: Some(2),
                limit: Some(10),
                ..Default::default()
            })
            .await
            .unwrap();

        // Second page of the 20 available pets, not of all 25
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total, 20);
        assert_eq!(page.items[0].name(), "pet-12");
        assert!(!page.has_more());
    }

    #[tokio::test]
    async fn combined_filters_intersect() {
        let handler = handler_with(vec![
            pet("A", "dog"),
            adopted("B", "dog"),
            pet("C", "cat"),
        ])
        .await;

        let page = handler
            .handle(ListPetsQuery {
                species: Some("dog".to_string()),
                status: Some(PetStatus::Available),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name(), "A");
    }
}
