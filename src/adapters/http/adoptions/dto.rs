//! HTTP DTOs for adoption endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::adoption::{AdoptionRequest, RequestStatus};
use crate::domain::foundation::{DomainError, ErrorCode, PetId, UserId};

/// Request to file an adoption bid.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAdoptionRequest {
    pub pet_id: PetId,
    pub adopter_id: UserId,
}

/// Request to settle an adoption bid.
///
/// The status arrives as a raw string so unknown values come back as a
/// domain `InvalidStatus` error rather than a serde rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewAdoptionRequest {
    pub status: String,
}

impl ReviewAdoptionRequest {
    /// Parses the requested target status.
    ///
    /// # Errors
    ///
    /// - `InvalidStatus` for anything other than the three known statuses
    pub fn target(&self) -> Result<RequestStatus, DomainError> {
        match self.status.as_str() {
            "pending" => Ok(RequestStatus::Pending),
            "approved" => Ok(RequestStatus::Approved),
            "rejected" => Ok(RequestStatus::Rejected),
            other => Err(DomainError::new(
                ErrorCode::InvalidStatus,
                format!("Unknown request status '{}'", other),
            )
            .with_detail("status", other.to_string())),
        }
    }
}

/// Query parameters for the adoption listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListAdoptionsParams {
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Adoption request view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct AdoptionResponse {
    pub id: String,
    pub pet_id: String,
    pub adopter_id: String,
    pub status: RequestStatus,
    pub requested_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<String>,
    pub created_at: String,
}

impl From<&AdoptionRequest> for AdoptionResponse {
    fn from(request: &AdoptionRequest) -> Self {
        Self {
            id: request.id().to_string(),
            pet_id: request.pet_id().to_string(),
            adopter_id: request.adopter_id().to_string(),
            status: request.status(),
            requested_at: request.requested_at().as_datetime().to_rfc3339(),
            approved_at: request
                .approved_at()
                .map(|ts| ts.as_datetime().to_rfc3339()),
            created_at: request.created_at().as_datetime().to_rfc3339(),
        }
    }
}

impl From<AdoptionRequest> for AdoptionResponse {
    fn from(request: AdoptionRequest) -> Self {
        Self::from(&request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::RequestId;

    #[test]
    fn known_statuses_parse() {
        let req = ReviewAdoptionRequest {
            status: "approved".to_string(),
        };
        assert_eq!(req.target().unwrap(), RequestStatus::Approved);

        let req = ReviewAdoptionRequest {
            status: "rejected".to_string(),
        };
        assert_eq!(req.target().unwrap(), RequestStatus::Rejected);
    }

    #[test]
    fn unknown_status_is_invalid_status() {
        let req = ReviewAdoptionRequest {
            status: "cancelled".to_string(),
        };
        let err = req.target().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStatus);
        assert_eq!(err.details.get("status"), Some(&"cancelled".to_string()));
    }

    #[test]
    fn pending_response_omits_approved_at() {
        let request = AdoptionRequest::new(RequestId::new(), PetId::new(), UserId::new());
        let json = serde_json::to_string(&AdoptionResponse::from(&request)).unwrap();
        assert!(json.contains("\"status\":\"pending\""));
        assert!(!json.contains("approved_at"));
    }
}
