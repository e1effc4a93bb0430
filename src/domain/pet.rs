//! Pet aggregate entity.
//!
//! Pets are listed by owners or shelters and adopted through the
//! adoption request workflow.
//!
//! # Availability
//!
//! `status` is not a free-form field: it starts as `Available` and only
//! the approval of an adoption request moves it to `Adopted`. Patches
//! deliberately cannot touch it.

use crate::domain::foundation::{
    DomainError, Entity, ErrorCode, PetId, StateMachine, Timestamp, UserId,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a pet's name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Availability of a pet for adoption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PetStatus {
    #[default]
    Available,
    Adopted,
}

impl StateMachine for PetStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use PetStatus::*;
        matches!((self, target), (Available, Adopted))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use PetStatus::*;
        match self {
            Available => vec![Adopted],
            Adopted => vec![],
        }
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PetStatus::Available => "Available",
            PetStatus::Adopted => "Adopted",
        };
        write!(f, "{}", s)
    }
}

/// Pet aggregate - an animal listed for adoption.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `name` and `species` are non-empty
/// - `status` becomes `Adopted` only through an approved adoption request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Unique identifier for this pet.
    id: PetId,

    /// User (owner or shelter) who listed the pet.
    owner_id: UserId,

    /// Pet's name.
    name: String,

    /// Species, e.g. "dog" or "cat".
    species: String,

    /// Breed, free text.
    breed: String,

    /// Age in years.
    age: u8,

    /// Free-text description shown on the listing.
    description: String,

    /// Current availability.
    status: PetStatus,

    /// When the listing was created.
    created_at: Timestamp,

    /// When the listing was last updated.
    updated_at: Timestamp,
}

/// Whitelisted mutable fields for a pet update.
///
/// `status` is intentionally absent: availability is owned by the
/// adoption workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetPatch {
    pub name: Option<String>,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub age: Option<u8>,
    pub description: Option<String>,
}

impl PetPatch {
    /// Returns true if the patch carries no changes.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.species.is_none()
            && self.breed.is_none()
            && self.age.is_none()
            && self.description.is_none()
    }
}

impl Pet {
    /// Create a new available pet listing.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if name or species is empty, or name too long
    pub fn new(
        id: PetId,
        owner_id: UserId,
        name: String,
        species: String,
        breed: String,
        age: u8,
        description: String,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;
        Self::validate_species(&species)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            owner_id,
            name,
            species,
            breed,
            age,
            description,
            status: PetStatus::Available,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a pet from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: PetId,
        owner_id: UserId,
        name: String,
        species: String,
        breed: String,
        age: u8,
        description: String,
        status: PetStatus,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            owner_id,
            name,
            species,
            breed,
            age,
            description,
            status,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the pet ID.
    pub fn id(&self) -> &PetId {
        &self.id
    }

    /// Returns the listing user's ID.
    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    /// Returns the pet's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the species.
    pub fn species(&self) -> &str {
        &self.species
    }

    /// Returns the breed.
    pub fn breed(&self) -> &str {
        &self.breed
    }

    /// Returns the age in years.
    pub fn age(&self) -> u8 {
        self.age
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the current availability.
    pub fn status(&self) -> PetStatus {
        self.status
    }

    /// Returns true if the pet can still be adopted.
    pub fn is_available(&self) -> bool {
        self.status == PetStatus::Available
    }

    /// Returns when the listing was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the listing was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply a patch of whitelisted fields.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if a patched name or species fails validation
    pub fn apply_patch(&mut self, patch: PetPatch) -> Result<(), DomainError> {
        if let Some(name) = patch.name {
            Self::validate_name(&name)?;
            self.name = name;
        }
        if let Some(species) = patch.species {
            Self::validate_species(&species)?;
            self.species = species;
        }
        if let Some(breed) = patch.breed {
            self.breed = breed;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Mark the pet as adopted.
    ///
    /// Called by the adoption workflow when a request is approved.
    ///
    /// # Errors
    ///
    /// - `InvalidStatus` if the pet is already adopted
    pub fn mark_adopted(&mut self) -> Result<(), DomainError> {
        self.status = self.status.transition_to(PetStatus::Adopted).map_err(|_| {
            DomainError::new(ErrorCode::InvalidStatus, "Pet is already adopted")
                .with_detail("pet_id", self.id.to_string())
        })?;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("name", "Name cannot be empty"));
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(
                "name",
                format!("Name must be {} characters or less", MAX_NAME_LENGTH),
            ));
        }
        Ok(())
    }

    fn validate_species(species: &str) -> Result<(), DomainError> {
        if species.trim().is_empty() {
            return Err(DomainError::validation(
                "species",
                "Species cannot be empty",
            ));
        }
        Ok(())
    }
}

impl Entity for Pet {
    type Id = PetId;
    const KIND: &'static str = "Pet";

    fn entity_id(&self) -> &PetId {
        &self.id
    }
}
