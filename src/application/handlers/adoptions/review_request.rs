//! ReviewRequestHandler - command handler for settling an adoption request.

use crate::domain::adoption::{AdoptionRequest, RequestStatus};
use crate::domain::foundation::{Caller, DomainError, ErrorCode, RequestId};
use crate::domain::pet::Pet;
use crate::ports::DynRecordStore;

use super::WorkflowLock;

/// Command to move a request to a terminal status.
#[derive(Debug, Clone)]
pub struct ReviewRequestCommand {
    pub caller: Caller,
    pub request_id: RequestId,
    pub target: RequestStatus,
}

/// Handler for approving or rejecting adoption requests.
///
/// # Transition rules
///
/// - `Pending` is never a valid target
/// - Re-applying the current terminal status is a no-op: the stored
///   request comes back unchanged, `approved_at` included
/// - Moving between the two terminal statuses fails with `InvalidStatus`
/// - Approval stamps `approved_at` and flips the pet to `Adopted`;
///   rejection touches neither
///
/// The request read, the pet write, and the request write all happen
/// under the workflow lock, so concurrent reviews serialize.
pub struct ReviewRequestHandler {
    adoptions: DynRecordStore<AdoptionRequest>,
    pets: DynRecordStore<Pet>,
    lock: WorkflowLock,
}

impl ReviewRequestHandler {
    pub fn new(
        adoptions: DynRecordStore<AdoptionRequest>,
        pets: DynRecordStore<Pet>,
        lock: WorkflowLock,
    ) -> Self {
        Self {
            adoptions,
            pets,
            lock,
        }
    }

    pub async fn handle(&self, cmd: ReviewRequestCommand) -> Result<AdoptionRequest, DomainError> {
        if !cmd.caller.role.can_review_adoptions() {
            return Err(DomainError::new(
                ErrorCode::Forbidden,
                "Only shelter and admin accounts may review adoption requests",
            ));
        }

        if cmd.target == RequestStatus::Pending {
            return Err(DomainError::new(
                ErrorCode::InvalidStatus,
                "A request cannot be moved back to pending",
            )
            .with_detail("to", cmd.target.to_string()));
        }

        let _guard = self.lock.lock().await;

        let mut request = self.adoptions.get(&cmd.request_id).await?;

        // Idempotence: re-applying the settled status changes nothing.
        if request.status() == cmd.target {
            return Ok(request);
        }

        match cmd.target {
            RequestStatus::Approved => {
                let mut pet = self.pets.get(request.pet_id()).await?;
                request.approve()?;
                pet.mark_adopted()?;
                self.pets.update(pet).await?;
            }
            RequestStatus::Rejected => {
                request.reject()?;
            }
            RequestStatus::Pending => unreachable!("rejected above"),
        }

        self.adoptions.update(request.clone()).await?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::super::workflow_lock;
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::foundation::{PetId, UserId, UserRole};
    use crate::domain::pet::PetStatus;
    use std::sync::Arc;

    struct Fixture {
        handler: ReviewRequestHandler,
        adoptions: DynRecordStore<AdoptionRequest>,
        pets: DynRecordStore<Pet>,
        pet_id: PetId,
        request_id: RequestId,
    }

    fn reviewer() -> Caller {
        Caller::new(UserId::new(), UserRole::Shelter)
    }

    async fn fixture() -> Fixture {
        let adoptions: DynRecordStore<AdoptionRequest> = Arc::new(InMemoryStore::new());
        let pets: DynRecordStore<Pet> = Arc::new(InMemoryStore::new());

        let pet = Pet::new(
            PetId::new(),
            UserId::new(),
            "Waffle".to_string(),
            "cat".to_string(),
            "calico".to_string(),
            2,
            String::new(),
        )
        .unwrap();
        let pet_id = *pet.id();
        pets.insert(pet).await.unwrap();

        let request = AdoptionRequest::new(RequestId::new(), pet_id, UserId::new());
        let request_id = *request.id();
        adoptions.insert(request).await.unwrap();

        Fixture {
            handler: ReviewRequestHandler::new(adoptions.clone(), pets.clone(), workflow_lock()),
            adoptions,
            pets,
            pet_id,
            request_id,
        }
    }

    fn command(fx: &Fixture, target: RequestStatus) -> ReviewRequestCommand {
        ReviewRequestCommand {
            caller: reviewer(),
            request_id: fx.request_id,
            target,
        }
    }

    #[tokio::test]
    async fn approval_settles_request_and_adopts_pet() {
        let fx = fixture().await;

        let request = fx
            .handler
            .handle(command(&fx, RequestStatus::Approved))
            .await
            .unwrap();

        assert_eq!(request.status(), RequestStatus::Approved);
        assert!(request.approved_at().is_some());
        assert_eq!(
            fx.pets.get(&fx.pet_id).await.unwrap().status(),
            PetStatus::Adopted
        );
        // Persisted, not just returned
        assert_eq!(
            fx.adoptions.get(&fx.request_id).await.unwrap().status(),
            RequestStatus::Approved
        );
    }

    #[tokio::test]
    async fn repeated_approval_is_a_no_op() {
        let fx = fixture().await;

        let first = fx
            .handler
            .handle(command(&fx, RequestStatus::Approved))
            .await
            .unwrap();
        let second = fx
            .handler
            .handle(command(&fx, RequestStatus::Approved))
            .await
            .unwrap();

        // Same observable state; approved_at not re-stamped
        assert_eq!(second, first);
        assert_eq!(second.approved_at(), first.approved_at());
        assert_eq!(
            fx.pets.get(&fx.pet_id).await.unwrap().status(),
            PetStatus::Adopted
        );
    }

    #[tokio::test]
    async fn rejection_never_touches_the_pet() {
        let fx = fixture().await;

        let request = fx
            .handler
            .handle(command(&fx, RequestStatus::Rejected))
            .await
            .unwrap();

        assert_eq!(request.status(), RequestStatus::Rejected);
        assert!(request.approved_at().is_none());
        assert_eq!(
            fx.pets.get(&fx.pet_id).await.unwrap().status(),
            PetStatus::Available
        );
    }

    #[tokio::test]
    async fn repeated_rejection_is_a_no_op() {
        let fx = fixture().await;

        fx.handler
            .handle(command(&fx, RequestStatus::Rejected))
            .await
            .unwrap();
        let again = fx
            .handler
            .handle(command(&fx, RequestStatus::Rejected))
            .await
            .unwrap();

        assert_eq!(again.status(), RequestStatus::Rejected);
    }

    #[tokio::test]
    async fn switching_terminal_statuses_is_invalid() {
        let fx = fixture().await;

        fx.handler
            .handle(command(&fx, RequestStatus::Rejected))
            .await
            .unwrap();
        let err = fx
            .handler
            .handle(command(&fx, RequestStatus::Approved))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidStatus);
        assert_eq!(
            fx.pets.get(&fx.pet_id).await.unwrap().status(),
            PetStatus::Available
        );
    }

    #[tokio::test]
    async fn pending_is_not_a_valid_target() {
        let fx = fixture().await;

        let err = fx
            .handler
            .handle(command(&fx, RequestStatus::Pending))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidStatus);
    }

    #[tokio::test]
    async fn unknown_request_is_not_found() {
        let fx = fixture().await;

        let err = fx
            .handler
            .handle(ReviewRequestCommand {
                caller: reviewer(),
                request_id: RequestId::new(),
                target: RequestStatus::Approved,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn owner_and_adopter_callers_are_forbidden() {
        let fx = fixture().await;

        for role in [UserRole::Owner, UserRole::Adopter] {
            let err = fx
                .handler
                .handle(ReviewRequestCommand {
                    caller: Caller::new(UserId::new(), role),
                    request_id: fx.request_id,
                    target: RequestStatus::Approved,
                })
                .await
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::Forbidden);
        }
        assert_eq!(
            fx.pets.get(&fx.pet_id).await.unwrap().status(),
            PetStatus::Available
        );
    }

    #[tokio::test]
    async fn concurrent_approvals_settle_exactly_once() {
        let fx = fixture().await;

        let handler = Arc::new(fx.handler);
        let mut tasks = Vec::new();
        for _ in 0..4 {
            let handler = Arc::clone(&handler);
            let request_id = fx.request_id;
            tasks.push(tokio::spawn(async move {
                handler
                    .handle(ReviewRequestCommand {
                        caller: reviewer(),
                        request_id,
                        target: RequestStatus::Approved,
                    })
                    .await
            }));
        }

        let mut approved_at = None;
        for task in tasks {
            let request = task.await.unwrap().unwrap();
            assert_eq!(request.status(), RequestStatus::Approved);
            // Every call observes the same stamp
            let stamp = *request.approved_at().unwrap();
            if let Some(previous) = approved_at {
                assert_eq!(stamp, previous);
            }
            approved_at = Some(stamp);
        }

        assert_eq!(
            fx.pets.get(&fx.pet_id).await.unwrap().status(),
            PetStatus::Adopted
        );
    }
}
