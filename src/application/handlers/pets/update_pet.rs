//! UpdatePetHandler - command handler for patching a pet listing.

use crate::domain::foundation::{DomainError, PetId};
use crate::domain::pet::{Pet, PetPatch};
use crate::ports::DynRecordStore;

/// Command to patch a pet's mutable fields.
///
/// Availability is not among them; only the adoption workflow moves a
/// pet to Adopted.
#[derive(Debug, Clone)]
pub struct UpdatePetCommand {
    pub pet_id: PetId,
    pub patch: PetPatch,
}

/// Handler for updating pets.
pub struct UpdatePetHandler {
    pets: DynRecordStore<Pet>,
}

impl UpdatePetHandler {
    pub fn new(pets: DynRecordStore<Pet>) -> Self {
        Self { pets }
    }

    pub async fn handle(&self, cmd: UpdatePetCommand) -> Result<Pet, DomainError> {
        let mut pet = self.pets.get(&cmd.pet_id).await?;
        pet.apply_patch(cmd.patch)?;
        self.pets.update(pet.clone()).await?;
        Ok(pet)
    }
}
