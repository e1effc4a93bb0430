//! HTTP DTOs for auth endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::users::UserResponse;
use crate::domain::foundation::UserRole;

/// Request to register a new account.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub contact: String,
    #[serde(default)]
    pub role: UserRole,
    pub secret: String,
}

/// Request to log in.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub contact: String,
    pub secret: String,
}

/// Response carrying a fresh bearer token.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

/// Response for the token check endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CallerResponse {
    pub id: String,
    pub role: UserRole,
}
