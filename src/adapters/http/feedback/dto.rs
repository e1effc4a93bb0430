//! HTTP DTOs for feedback endpoints.
//!
//! Ratings arrive as bare integers and are range-checked by the
//! `Rating` type, so an out-of-range score is a domain error with the
//! offending value in the details, not a serde rejection.

use serde::{Deserialize, Serialize};

use crate::domain::feedback::{Feedback, FeedbackPatch};
use crate::domain::foundation::{DomainError, EventId, PetId, Rating, UserId};

/// Request to leave feedback.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveFeedbackRequest {
    pub user_id: UserId,
    #[serde(default)]
    pub pet_id: Option<PetId>,
    #[serde(default)]
    pub event_id: Option<EventId>,
    pub text: String,
    pub rating: u8,
}

impl LeaveFeedbackRequest {
    /// Parses the rating into the validated domain type.
    pub fn rating(&self) -> Result<Rating, DomainError> {
        Ok(Rating::try_from_u8(self.rating)?)
    }
}

/// Request to patch feedback text and/or rating.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFeedbackRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
}

impl UpdateFeedbackRequest {
    /// Builds the domain patch, validating the rating when present.
    pub fn into_patch(self) -> Result<FeedbackPatch, DomainError> {
        let rating = self.rating.map(Rating::try_from_u8).transpose()?;
        Ok(FeedbackPatch {
            text: self.text,
            rating,
        })
    }
}

/// Query parameters for the feedback listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListFeedbackParams {
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Feedback view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackResponse {
    pub id: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    pub text: String,
    pub rating: u8,
    pub created_at: String,
}

impl From<&Feedback> for FeedbackResponse {
    fn from(feedback: &Feedback) -> Self {
        Self {
            id: feedback.id().to_string(),
            user_id: feedback.user_id().to_string(),
            pet_id: feedback.pet_id().map(|id| id.to_string()),
            event_id: feedback.event_id().map(|id| id.to_string()),
            text: feedback.text().to_string(),
            rating: feedback.rating().value(),
            created_at: feedback.created_at().as_datetime().to_rfc3339(),
        }
    }
}

impl From<Feedback> for FeedbackResponse {
    fn from(feedback: Feedback) -> Self {
        Self::from(&feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn out_of_range_rating_is_out_of_range_error() {
        let req = LeaveFeedbackRequest {
            user_id: UserId::new(),
            pet_id: None,
            event_id: None,
            text: "Great shelter".to_string(),
            rating: 6,
        };
        let err = req.rating().unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfRange);
    }

    #[test]
    fn patch_without_rating_skips_validation() {
        let req = UpdateFeedbackRequest {
            text: Some("Revised note".to_string()),
            rating: None,
        };
        let patch = req.into_patch().unwrap();
        assert_eq!(patch.text.as_deref(), Some("Revised note"));
        assert!(patch.rating.is_none());
    }

    #[test]
    fn response_omits_absent_target_links() {
        let feedback = Feedback::new(
            crate::domain::foundation::FeedbackId::new(),
            UserId::new(),
            None,
            None,
            "Easy to use".to_string(),
            Rating::try_from_u8(4).unwrap(),
        )
        .unwrap();

        let json = serde_json::to_string(&FeedbackResponse::from(&feedback)).unwrap();
        assert!(!json.contains("pet_id"));
        assert!(!json.contains("event_id"));
        assert!(json.contains("\"rating\":4"));
    }
}
