//! Shared HTTP error mapping.
//!
//! Every endpoint funnels `DomainError` through one status-code
//! mapping, so the taxonomy-to-status table lives in exactly one
//! place and the core stays transport-agnostic.

use std::collections::HashMap;
use std::str::FromStr;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// JSON body returned for every failed request.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub details: HashMap<String, String>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            details: HashMap::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_FAILED", message)
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        Self {
            error: err.message.clone(),
            code: err.code.to_string(),
            details: err.details.clone(),
        }
    }
}

/// Maps an error code to its HTTP status.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat
        | ErrorCode::InvalidReference
        | ErrorCode::InvalidStatus => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthenticated => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::DuplicateKey | ErrorCode::DuplicateContact => StatusCode::CONFLICT,
        ErrorCode::StorageError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Renders a domain error as an HTTP response.
pub fn domain_error_response(err: DomainError) -> Response {
    let status = status_for(err.code);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(code = %err.code, message = %err.message, "internal error");
    }
    (status, Json(ErrorResponse::from(&err))).into_response()
}

/// Parses a path segment into a typed id, or a 400 response.
///
/// Returns `Result<Id, Response>` so handlers can `match` and return
/// early without repeating the error shape.
pub fn parse_path_id<I: FromStr>(raw: &str, what: &str) -> Result<I, Response> {
    raw.parse::<I>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!("Invalid {} ID", what))),
        )
            .into_response()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::PetId;

    #[test]
    fn taxonomy_maps_to_expected_statuses() {
        assert_eq!(status_for(ErrorCode::ValidationFailed), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::OutOfRange), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::InvalidReference), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::InvalidStatus), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::Unauthenticated), StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(ErrorCode::Forbidden), StatusCode::FORBIDDEN);
        assert_eq!(status_for(ErrorCode::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorCode::DuplicateKey), StatusCode::CONFLICT);
        assert_eq!(status_for(ErrorCode::DuplicateContact), StatusCode::CONFLICT);
        assert_eq!(
            status_for(ErrorCode::InternalError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn response_body_carries_code_and_details() {
        let err = DomainError::invalid_reference("owner_id", "abc");
        let body = ErrorResponse::from(&err);

        assert_eq!(body.code, "INVALID_REFERENCE");
        assert_eq!(body.details.get("field"), Some(&"owner_id".to_string()));
    }

    #[test]
    fn parse_path_id_accepts_uuids_and_rejects_garbage() {
        let id = PetId::new();
        let parsed: PetId = parse_path_id(&id.to_string(), "pet").unwrap();
        assert_eq!(parsed, id);

        let result: Result<PetId, _> = parse_path_id("not-a-uuid", "pet");
        assert!(result.is_err());
    }
}
