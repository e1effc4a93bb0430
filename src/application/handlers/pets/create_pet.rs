//! CreatePetHandler - command handler for listing a pet.

use crate::application::reference::require_exists;
use crate::domain::foundation::{Caller, DomainError, ErrorCode, PetId, UserId};
use crate::domain::pet::Pet;
use crate::domain::user::User;
use crate::ports::DynRecordStore;

/// Command to create a pet listing.
#[derive(Debug, Clone)]
pub struct CreatePetCommand {
    pub caller: Caller,
    pub owner_id: UserId,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: u8,
    pub description: String,
}

/// Handler for creating pets.
///
/// The owner reference is resolved before anything is written, so a
/// bad `owner_id` persists nothing. New pets always start Available.
pub struct CreatePetHandler {
    pets: DynRecordStore<Pet>,
    users: DynRecordStore<User>,
}

impl CreatePetHandler {
    pub fn new(pets: DynRecordStore<Pet>, users: DynRecordStore<User>) -> Self {
        Self { pets, users }
    }

    pub async fn handle(&self, cmd: CreatePetCommand) -> Result<Pet, DomainError> {
        if !cmd.caller.role.can_manage_pets() {
            return Err(DomainError::new(
                ErrorCode::Forbidden,
                "Adopters cannot create pet listings",
            ));
        }

        require_exists(self.users.as_ref(), &cmd.owner_id, "owner_id").await?;

        let pet = Pet::new(
            PetId::new(),
            cmd.owner_id,
            cmd.name,
            cmd.species,
            cmd.breed,
            cmd.age,
            cmd.description,
        )?;
        self.pets.insert(pet.clone()).await?;

        Ok(pet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::foundation::{CredentialHash, UserRole};
    use crate::domain::pet::PetStatus;
    use std::sync::Arc;

    struct Fixture {
        handler: CreatePetHandler,
        pets: DynRecordStore<Pet>,
        owner: User,
    }

    async fn fixture() -> Fixture {
        let pets: DynRecordStore<Pet> = Arc::new(InMemoryStore::new());
        let users: DynRecordStore<User> = Arc::new(InMemoryStore::new());

        let owner = User::new(
            UserId::new(),
            "Shelter North".to_string(),
            "north@example.com".to_string(),
            UserRole::Shelter,
            CredentialHash::new("hash"),
        )
        .unwrap();
        users.insert(owner.clone()).await.unwrap();

        Fixture {
            handler: CreatePetHandler::new(pets.clone(), users),
            pets,
            owner,
        }
    }

    fn command(caller: Caller, owner_id: UserId) -> CreatePetCommand {
        CreatePetCommand {
            caller,
            owner_id,
            name: "Mochi".to_string(),
            species: "cat".to_string(),
            breed: "tabby".to_string(),
            age: 2,
            description: "Quiet lap cat".to_string(),
        }
    }

    #[tokio::test]
    async fn creates_available_pet_for_known_owner() {
        let fx = fixture().await;
        let caller = Caller::new(*fx.owner.id(), fx.owner.role());

        let pet = fx.handler.handle(command(caller, *fx.owner.id())).await.unwrap();

        assert_eq!(pet.status(), PetStatus::Available);
        assert_eq!(pet.owner_id(), fx.owner.id());
        assert_eq!(fx.pets.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn unknown_owner_fails_and_persists_nothing() {
        let fx = fixture().await;
        let caller = Caller::new(*fx.owner.id(), fx.owner.role());

        let err = fx
            .handler
            .handle(command(caller, UserId::new()))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidReference);
        assert_eq!(err.details.get("field"), Some(&"owner_id".to_string()));
        assert_eq!(fx.pets.len().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn adopter_caller_is_forbidden() {
        let fx = fixture().await;
        let caller = Caller::new(UserId::new(), UserRole::Adopter);

        let err = fx
            .handler
            .handle(command(caller, *fx.owner.id()))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::Forbidden);
        assert_eq!(fx.pets.len().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn empty_name_fails_validation() {
        let fx = fixture().await;
        let caller = Caller::new(*fx.owner.id(), fx.owner.role());

        let mut cmd = command(caller, *fx.owner.id());
        cmd.name = "".to_string();
        let err = fx.handler.handle(cmd).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(fx.pets.len().await.unwrap(), 0);
    }
}
