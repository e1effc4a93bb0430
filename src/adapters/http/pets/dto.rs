//! HTTP DTOs for pet endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;
use crate::domain::pet::{Pet, PetPatch, PetStatus};

/// Request to create a pet listing.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePetRequest {
    pub owner_id: UserId,
    pub name: String,
    pub species: String,
    #[serde(default)]
    pub breed: String,
    pub age: u8,
    #[serde(default)]
    pub description: String,
}

/// Request to patch a pet listing. Availability is not patchable.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePetRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<UpdatePetRequest> for PetPatch {
    fn from(req: UpdatePetRequest) -> Self {
        PetPatch {
            name: req.name,
            species: req.species,
            breed: req.breed,
            age: req.age,
            description: req.description,
        }
    }
}

/// Query parameters for the pet listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPetsParams {
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub status: Option<PetStatus>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Pet view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct PetResponse {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: u8,
    pub description: String,
    pub status: PetStatus,
    pub created_at: String,
}

impl From<&Pet> for PetResponse {
    fn from(pet: &Pet) -> Self {
        Self {
            id: pet.id().to_string(),
            owner_id: pet.owner_id().to_string(),
            name: pet.name().to_string(),
            species: pet.species().to_string(),
            breed: pet.breed().to_string(),
            age: pet.age(),
            description: pet.description().to_string(),
            status: pet.status(),
            created_at: pet.created_at().as_datetime().to_rfc3339(),
        }
    }
}

impl From<Pet> for PetResponse {
    fn from(pet: Pet) -> Self {
        Self::from(&pet)
    }
}
