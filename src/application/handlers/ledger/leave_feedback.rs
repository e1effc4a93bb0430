//! LeaveFeedbackHandler - command handler for filing feedback.

use crate::application::reference::require_exists;
use crate::domain::care_event::PetCareEvent;
use crate::domain::feedback::Feedback;
use crate::domain::foundation::{DomainError, EventId, FeedbackId, PetId, Rating, UserId};
use crate::domain::pet::Pet;
use crate::domain::user::User;
use crate::ports::DynRecordStore;

/// Command to leave feedback, optionally tied to a pet and/or event.
#[derive(Debug, Clone)]
pub struct LeaveFeedbackCommand {
    pub user_id: UserId,
    pub pet_id: Option<PetId>,
    pub event_id: Option<EventId>,
    pub text: String,
    pub rating: Rating,
}

/// Handler for leaving feedback.
///
/// The author is always validated; the pet and event links only when
/// present. Absence of an optional link is not an error.
pub struct LeaveFeedbackHandler {
    feedback: DynRecordStore<Feedback>,
    users: DynRecordStore<User>,
    pets: DynRecordStore<Pet>,
    events: DynRecordStore<PetCareEvent>,
}

impl LeaveFeedbackHandler {
    pub fn new(
        feedback: DynRecordStore<Feedback>,
        users: DynRecordStore<User>,
        pets: DynRecordStore<Pet>,
        events: DynRecordStore<PetCareEvent>,
    ) -> Self {
        Self {
            feedback,
            users,
            pets,
            events,
        }
    }

    pub async fn handle(&self, cmd: LeaveFeedbackCommand) -> Result<Feedback, DomainError> {
        require_exists(self.users.as_ref(), &cmd.user_id, "user_id").await?;
        if let Some(pet_id) = &cmd.pet_id {
            require_exists(self.pets.as_ref(), pet_id, "pet_id").await?;
        }
        if let Some(event_id) = &cmd.event_id {
            require_exists(self.events.as_ref(), event_id, "event_id").await?;
        }

        let feedback = Feedback::new(
            FeedbackId::new(),
            cmd.user_id,
            cmd.pet_id,
            cmd.event_id,
            cmd.text,
            cmd.rating,
        )?;
        self.feedback.insert(feedback.clone()).await?;

        Ok(feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::foundation::{CredentialHash, ErrorCode, Timestamp, UserRole};
    use std::sync::Arc;

    struct Fixture {
        handler: LeaveFeedbackHandler,
        feedback: DynRecordStore<Feedback>,
        user_id: UserId,
        pet_id: PetId,
        event_id: EventId,
    }

    async fn fixture() -> Fixture {
        let feedback: DynRecordStore<Feedback> = Arc::new(InMemoryStore::new());
        let users: DynRecordStore<User> = Arc::new(InMemoryStore::new());
        let pets: DynRecordStore<Pet> = Arc::new(InMemoryStore::new());
        let events: DynRecordStore<PetCareEvent> = Arc::new(InMemoryStore::new());

        let user = User::new(
            UserId::new(),
            "Dana Reyes".to_string(),
            "dana@example.com".to_string(),
            UserRole::Adopter,
            CredentialHash::new("hash"),
        )
        .unwrap();
        let user_id = *user.id();
        users.insert(user).await.unwrap();

        let pet = Pet::new(
            PetId::new(),
            user_id,
            "Olive".to_string(),
            "cat".to_string(),
            String::new(),
            1,
            String::new(),
        )
        .unwrap();
        let pet_id = *pet.id();
        pets.insert(pet).await.unwrap();

        let event = PetCareEvent::new(
            EventId::new(),
            "Grooming day".to_string(),
            String::new(),
            Timestamp::now(),
            "Park".to_string(),
            user_id,
        )
        .unwrap();
        let event_id = *event.id();
        events.insert(event).await.unwrap();

        Fixture {
            handler: LeaveFeedbackHandler::new(feedback.clone(), users, pets, events),
            feedback,
            user_id,
            pet_id,
            event_id,
        }
    }

    fn command(fx: &Fixture) -> LeaveFeedbackCommand {
        LeaveFeedbackCommand {
            user_id: fx.user_id,
            pet_id: None,
            event_id: None,
            text: "Lovely event, well organized".to_string(),
            rating: Rating::try_from_u8(5).unwrap(),
        }
    }

    #[tokio::test]
    async fn files_feedback_without_optional_links() {
        let fx = fixture().await;

        let feedback = fx.handler.handle(command(&fx)).await.unwrap();

        assert_eq!(feedback.rating().value(), 5);
        assert!(feedback.pet_id().is_none());
        assert!(feedback.event_id().is_none());
        assert_eq!(fx.feedback.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn validates_optional_links_when_present() {
        let fx = fixture().await;

        let mut cmd = command(&fx);
        cmd.pet_id = Some(fx.pet_id);
        cmd.event_id = Some(fx.event_id);
        let feedback = fx.handler.handle(cmd).await.unwrap();

        assert_eq!(feedback.pet_id(), Some(&fx.pet_id));
        assert_eq!(feedback.event_id(), Some(&fx.event_id));
    }

    #[tokio::test]
    async fn unknown_author_is_invalid_reference() {
        let fx = fixture().await;

        let mut cmd = command(&fx);
        cmd.user_id = UserId::new();
        let err = fx.handler.handle(cmd).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidReference);
        assert_eq!(err.details.get("field"), Some(&"user_id".to_string()));
        assert_eq!(fx.feedback.len().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn dangling_pet_link_is_invalid_reference() {
        let fx = fixture().await;

        let mut cmd = command(&fx);
        cmd.pet_id = Some(PetId::new());
        let err = fx.handler.handle(cmd).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidReference);
        assert_eq!(err.details.get("field"), Some(&"pet_id".to_string()));
    }

    #[tokio::test]
    async fn dangling_event_link_is_invalid_reference() {
        let fx = fixture().await;

        let mut cmd = command(&fx);
        cmd.event_id = Some(EventId::new());
        let err = fx.handler.handle(cmd).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidReference);
        assert_eq!(err.details.get("field"), Some(&"event_id".to_string()));
    }

    #[tokio::test]
    async fn boundary_ratings_are_accepted() {
        let fx = fixture().await;

        for value in [1, 5] {
            let mut cmd = command(&fx);
            cmd.rating = Rating::try_from_u8(value).unwrap();
            fx.handler.handle(cmd).await.unwrap();
        }
        assert_eq!(fx.feedback.len().await.unwrap(), 2);
    }
}
