//! PetCareEvent aggregate entity.
//!
//! Care events are organizer-hosted happenings: vaccination drives,
//! adoption fairs, training workshops.

use crate::domain::foundation::{DomainError, Entity, EventId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// Maximum length for an event title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// PetCareEvent aggregate - a scheduled happening with an organizer.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `title` is 1-200 characters, non-empty
/// - `location` is non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetCareEvent {
    /// Unique identifier for this event.
    id: EventId,

    /// Event title.
    title: String,

    /// Free-text description.
    description: String,

    /// When the event takes place.
    date_time: Timestamp,

    /// Where the event takes place.
    location: String,

    /// User hosting the event.
    organizer_id: UserId,

    /// When the record was created.
    created_at: Timestamp,

    /// When the record was last updated.
    updated_at: Timestamp,
}

/// Whitelisted mutable fields for an event update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareEventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date_time: Option<Timestamp>,
    pub location: Option<String>,
}

impl CareEventPatch {
    /// Returns true if the patch carries no changes.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.date_time.is_none()
            && self.location.is_none()
    }
}

impl PetCareEvent {
    /// Create a new care event.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if title or location is empty, or title too long
    pub fn new(
        id: EventId,
        title: String,
        description: String,
        date_time: Timestamp,
        location: String,
        organizer_id: UserId,
    ) -> Result<Self, DomainError> {
        Self::validate_title(&title)?;
        Self::validate_location(&location)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            title,
            description,
            date_time,
            location,
            organizer_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute an event from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: EventId,
        title: String,
        description: String,
        date_time: Timestamp,
        location: String,
        organizer_id: UserId,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            title,
            description,
            date_time,
            location,
            organizer_id,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the event ID.
    pub fn id(&self) -> &EventId {
        &self.id
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns when the event takes place.
    pub fn date_time(&self) -> &Timestamp {
        &self.date_time
    }

    /// Returns the location.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the organizer's user ID.
    pub fn organizer_id(&self) -> &UserId {
        &self.organizer_id
    }

    /// Returns when the record was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the record was last updated.
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
    /// - `ValidationFailed` if a patched title or location fails validation
    pub fn apply_patch(&mut self, patch: CareEventPatch) -> Result<(), DomainError> {
        if let Some(title) = patch.title {
            Self::validate_title(&title)?;
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date_time) = patch.date_time {
            self.date_time = date_time;
        }
        if let Some(location) = patch.location {
            Self::validate_location(&location)?;
            self.location = location;
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn validate_title(title: &str) -> Result<(), DomainError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("title", "Title cannot be empty"));
        }
        if trimmed.len() > MAX_TITLE_LENGTH {
            return Err(DomainError::validation(
                "title",
                format!("Title must be {} characters or less", MAX_TITLE_LENGTH),
            ));
        }
        Ok(())
    }

    fn validate_location(location: &str) -> Result<(), DomainError> {
        if location.trim().is_empty() {
            return Err(DomainError::validation(
                "location",
                "Location cannot be empty",
            ));
        }
        Ok(())
    }
}

impl Entity for PetCareEvent {
    type Id = EventId;
    const KIND: &'static str = "PetCareEvent";

    fn entity_id(&self) -> &EventId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_event() -> PetCareEvent {
        PetCareEvent::new(
            EventId::new(),
            "Vaccination Day".to_string(),
            "Free rabies shots".to_string(),
            Timestamp::now(),
            "Main Street Shelter".to_string(),
            UserId::new(),
        )
        .unwrap()
    }

    // Construction tests

    #[test]
    fn new_event_stores_fields() {
        let event = test_event();
        assert_eq!(event.title(), "Vaccination Day");
        assert_eq!(event.location(), "Main Street Shelter");
    }

    #[test]
    fn new_event_rejects_empty_title() {
        let result = PetCareEvent::new(
            EventId::new(),
            " ".to_string(),
            String::new(),
            Timestamp::now(),
            "Somewhere".to_string(),
            UserId::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn new_event_rejects_empty_location() {
        let result = PetCareEvent::new(
            EventId::new(),
            "Adoption Fair".to_string(),
            String::new(),
            Timestamp::now(),
            "".to_string(),
            UserId::new(),
        );
        assert!(result.is_err());
    }

    // Patch tests

    #[test]
    fn apply_patch_updates_present_fields() {
        let mut event = test_event();
        let new_time = Timestamp::from_unix_secs(1893456000);
        event
            .apply_patch(CareEventPatch {
                location: Some("River Park".to_string()),
                date_time: Some(new_time),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(event.location(), "River Park");
        assert_eq!(event.date_time(), &new_time);
        assert_eq!(event.title(), "Vaccination Day");
    }

    #[test]
    fn apply_patch_rejects_empty_location() {
        let mut event = test_event();
        let result = event.apply_patch(CareEventPatch {
            location: Some("  ".to_string()),
            ..Default::default()
        });
        assert!(result.is_err());
        assert_eq!(event.location(), "Main Street Shelter");
    }

    // Serialization tests

    #[test]
    fn event_round_trips_through_json() {
        let event = test_event();
        let json = serde_json::to_string(&event).unwrap();
        let back: PetCareEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
