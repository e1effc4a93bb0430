//! Authentication types for the domain layer.
//!
//! These types represent an authenticated caller extracted from a bearer
//! token. They have **no external dependencies** - any token scheme can
//! populate them via the `AuthProvider` port.
//!
//! # Example
//!
//! ```ignore
//! // In HTTP middleware, after token validation:
//! let caller = Caller::new(user_id, UserRole::Adopter);
//!
//! // Inject into request extensions for handlers to use
//! request.extensions_mut().insert(caller);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::{DomainError, ErrorCode, UserId, UserRole};

/// Authenticated caller extracted from a validated token.
///
/// This is a **domain type** with no provider dependencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// The unique user identifier the token was issued for.
    pub id: UserId,

    /// The role the caller held when the token was issued.
    pub role: UserRole,
}

impl Caller {
    /// Creates a new authenticated caller.
    ///
    /// This is typically called by the `AuthProvider` adapter after
    /// successfully validating a token.
    pub fn new(id: UserId, role: UserRole) -> Self {
        Self { id, role }
    }

    /// Returns true if the caller is the given user.
    pub fn is_user(&self, user_id: &UserId) -> bool {
        &self.id == user_id
    }
}

/// Opaque hashed credential.
///
/// Produced only by the `AuthProvider`; the plaintext secret never
/// enters the domain layer. Debug output is redacted.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialHash(String);

impl CredentialHash {
    /// Wraps an already-hashed credential string.
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Returns the hash in PHC string format.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CredentialHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CredentialHash(***)")
    }
}

/// Authentication errors that can occur during hashing or token validation.
///
/// These errors are **domain-centric** - they describe what went wrong
/// from the application's perspective, not the token library's.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired (separate from InvalidToken for specific handling).
    #[error("Token expired")]
    TokenExpired,

    /// The presented secret does not match the stored credential.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Hashing or signing failed inside the provider.
    #[error("Credential processing failed: {0}")]
    ProviderFailure(String),
}

impl AuthError {
    /// Creates a provider failure error with a message.
    pub fn provider_failure(message: impl Into<String>) -> Self {
        Self::ProviderFailure(message.into())
    }

    /// Returns true if this error indicates the caller should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidToken | AuthError::TokenExpired | AuthError::InvalidCredentials
        )
    }
}

impl From<AuthError> for DomainError {
    fn from(err: AuthError) -> Self {
        let code = match &err {
            AuthError::ProviderFailure(_) => ErrorCode::InternalError,
            _ => ErrorCode::Unauthenticated,
        };
        DomainError::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_new_creates_caller() {
        let id = UserId::new();
        let caller = Caller::new(id, UserRole::Adopter);

        assert_eq!(caller.id, id);
        assert_eq!(caller.role, UserRole::Adopter);
    }

    #[test]
    fn caller_is_user_matches_own_id() {
        let id = UserId::new();
        let caller = Caller::new(id, UserRole::Owner);

        assert!(caller.is_user(&id));
        assert!(!caller.is_user(&UserId::new()));
    }

    #[test]
    fn credential_hash_preserves_value() {
        let hash = CredentialHash::new("$argon2id$v=19$abc");
        assert_eq!(hash.as_str(), "$argon2id$v=19$abc");
    }

    #[test]
    fn credential_hash_debug_is_redacted() {
        let hash = CredentialHash::new("$argon2id$v=19$abc");
        let rendered = format!("{:?}", hash);
        assert!(!rendered.contains("argon2"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn auth_error_invalid_token_displays_correctly() {
        let err = AuthError::InvalidToken;
        assert_eq!(format!("{}", err), "Invalid or expired token");
    }

    #[test]
    fn auth_error_requires_reauthentication_for_token_errors() {
        assert!(AuthError::InvalidToken.requires_reauthentication());
        assert!(AuthError::TokenExpired.requires_reauthentication());
        assert!(AuthError::InvalidCredentials.requires_reauthentication());
        assert!(!AuthError::provider_failure("boom").requires_reauthentication());
    }

    #[test]
    fn auth_error_converts_to_unauthenticated_code() {
        let err: DomainError = AuthError::InvalidToken.into();
        assert_eq!(err.code, ErrorCode::Unauthenticated);
    }

    #[test]
    fn provider_failure_converts_to_internal_code() {
        let err: DomainError = AuthError::provider_failure("hashing broke").into();
        assert_eq!(err.code, ErrorCode::InternalError);
    }
}
