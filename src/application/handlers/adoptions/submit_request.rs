//! SubmitRequestHandler - command handler for filing an adoption request.

use crate::application::reference::require_exists;
use crate::domain::adoption::AdoptionRequest;
use crate::domain::foundation::{DomainError, ErrorCode, PetId, RequestId, UserId};
use crate::domain::pet::Pet;
use crate::domain::user::User;
use crate::ports::DynRecordStore;

use super::WorkflowLock;

/// Command to submit an adoption request.
#[derive(Debug, Clone)]
pub struct SubmitRequestCommand {
    pub pet_id: PetId,
    pub adopter_id: UserId,
}

/// Handler for submitting adoption requests.
///
/// A pet that is already adopted rejects new requests outright: a
/// request that can never be approved has no reason to exist. The
/// availability check and the insert run under the workflow lock so a
/// concurrent approval cannot slip between them.
pub struct SubmitRequestHandler {
    adoptions: DynRecordStore<AdoptionRequest>,
    pets: DynRecordStore<Pet>,
    users: DynRecordStore<User>,
    lock: WorkflowLock,
}

impl SubmitRequestHandler {
    pub fn new(
        adoptions: DynRecordStore<AdoptionRequest>,
        pets: DynRecordStore<Pet>,
        users: DynRecordStore<User>,
        lock: WorkflowLock,
    ) -> Self {
        Self {
            adoptions,
            pets,
            users,
            lock,
        }
    }

    pub async fn handle(&self, cmd: SubmitRequestCommand) -> Result<AdoptionRequest, DomainError> {
        let _guard = self.lock.lock().await;

        let pet = require_exists(self.pets.as_ref(), &cmd.pet_id, "pet_id").await?;
        require_exists(self.users.as_ref(), &cmd.adopter_id, "adopter_id").await?;

        if !pet.is_available() {
            return Err(DomainError::new(
                ErrorCode::InvalidStatus,
                "Pet has already been adopted",
            )
            .with_detail("pet_id", cmd.pet_id.to_string()));
        }

        let request = AdoptionRequest::new(RequestId::new(), cmd.pet_id, cmd.adopter_id);
        self.adoptions.insert(request.clone()).await?;

        Ok(request)
    }
}
