//! HTTP DTOs for user endpoints.
//!
//! The credential hash never appears in any response shape.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserRole;
use crate::domain::user::{User, UserPatch};

/// User view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub role: UserRole,
    pub created_at: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().to_string(),
            contact: user.contact().to_string(),
            role: user.role(),
            created_at: user.created_at().as_datetime().to_rfc3339(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

/// Request to patch a user's mutable fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        UserPatch {
            name: req.name,
            contact: req.contact,
        }
    }
}

/// Query parameters for the user listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListUsersParams {
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
}
