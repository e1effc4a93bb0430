//! HTTP DTOs for care event endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::care_event::{CareEventPatch, PetCareEvent};
use crate::domain::foundation::{Timestamp, UserId};

/// Request to schedule a care event.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleEventRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date_time: Timestamp,
    pub location: String,
    pub organizer_id: UserId,
}

/// Request to patch a care event. The organizer is not patchable.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEventRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date_time: Option<Timestamp>,
    #[serde(default)]
    pub location: Option<String>,
}

impl From<UpdateEventRequest> for CareEventPatch {
    fn from(req: UpdateEventRequest) -> Self {
        CareEventPatch {
            title: req.title,
            description: req.description,
            date_time: req.date_time,
            location: req.location,
        }
    }
}

/// Query parameters for the event listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListEventsParams {
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Care event view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct CareEventResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date_time: String,
    pub location: String,
    pub organizer_id: String,
    pub created_at: String,
}

impl From<&PetCareEvent> for CareEventResponse {
    fn from(event: &PetCareEvent) -> Self {
        Self {
            id: event.id().to_string(),
            title: event.title().to_string(),
            description: event.description().to_string(),
            date_time: event.date_time().as_datetime().to_rfc3339(),
            location: event.location().to_string(),
            organizer_id: event.organizer_id().to_string(),
            created_at: event.created_at().as_datetime().to_rfc3339(),
        }
    }
}

impl From<PetCareEvent> for CareEventResponse {
    fn from(event: PetCareEvent) -> Self {
        Self::from(&event)
    }
}
