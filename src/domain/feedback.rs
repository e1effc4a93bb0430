//! Feedback aggregate entity.
//!
//! Feedback pairs a rated score with free text and may point at a pet,
//! a care event, both, or neither (general platform feedback).

use crate::domain::foundation::{
    DomainError, Entity, EventId, FeedbackId, PetId, Rating, Timestamp, UserId,
};
use serde::{Deserialize, Serialize};

/// Feedback aggregate - a rated comment from a user.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `text` is non-empty
/// - `rating` is between 1 and 5 (enforced by the `Rating` type)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Unique identifier for this feedback entry.
    id: FeedbackId,

    /// User leaving the feedback.
    user_id: UserId,

    /// Pet the feedback is about, if any.
    pet_id: Option<PetId>,

    /// Care event the feedback is about, if any.
    event_id: Option<EventId>,

    /// Free-text comment.
    text: String,

    /// Score from 1 to 5.
    rating: Rating,

    /// When the feedback was left.
    created_at: Timestamp,

    /// When the feedback was last updated.
    updated_at: Timestamp,
}

/// Whitelisted mutable fields for a feedback update.
///
/// The target links (`pet_id`, `event_id`) are fixed at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackPatch {
    pub text: Option<String>,
    pub rating: Option<Rating>,
}

impl FeedbackPatch {
    /// Returns true if the patch carries no changes.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.rating.is_none()
    }
}

impl Feedback {
    /// Create a new feedback entry.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if text is empty
    pub fn new(
        id: FeedbackId,
        user_id: UserId,
        pet_id: Option<PetId>,
        event_id: Option<EventId>,
        text: String,
        rating: Rating,
    ) -> Result<Self, DomainError> {
        Self::validate_text(&text)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            user_id,
            pet_id,
            event_id,
            text,
            rating,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a feedback entry from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: FeedbackId,
        user_id: UserId,
        pet_id: Option<PetId>,
        event_id: Option<EventId>,
        text: String,
        rating: Rating,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            pet_id,
            event_id,
            text,
            rating,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the feedback ID.
    pub fn id(&self) -> &FeedbackId {
        &self.id
    }

    /// Returns the author's user ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the linked pet, if any.
    pub fn pet_id(&self) -> Option<&PetId> {
        self.pet_id.as_ref()
    }

    /// Returns the linked care event, if any.
    pub fn event_id(&self) -> Option<&EventId> {
        self.event_id.as_ref()
    }

    /// Returns the comment text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the rating.
    pub fn rating(&self) -> Rating {
        self.rating
    }

    /// Returns when the feedback was left.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the feedback was last updated.
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
    /// - `ValidationFailed` if a patched text is empty
    pub fn apply_patch(&mut self, patch: FeedbackPatch) -> Result<(), DomainError> {
        if let Some(text) = patch.text {
            Self::validate_text(&text)?;
            self.text = text;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }

    fn validate_text(text: &str) -> Result<(), DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::validation("text", "Text cannot be empty"));
        }
        Ok(())
    }
}

impl Entity for Feedback {
    type Id = FeedbackId;
    const KIND: &'static str = "Feedback";

    fn entity_id(&self) -> &FeedbackId {
        &self.id
    }
}
