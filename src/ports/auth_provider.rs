//! Auth provider port for credential hashing and token handling.
//!
//! The core never sees plaintext secrets as bare strings and never
//! parses tokens itself: both concerns live behind this port. The
//! bundled adapter signs JWTs and hashes with argon2, but nothing in
//! the application layer depends on that choice.
//!
//! # Example
//!
//! ```ignore
//! // In the login flow
//! let ok = auth.verify_credential(&secret, user.credential()).await?;
//! if !ok {
//!     return Err(AuthError::InvalidCredentials.into());
//! }
//! let token = auth.issue_token(&Caller::new(*user.id(), user.role())).await?;
//! ```

use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::foundation::{AuthError, Caller, CredentialHash};

/// Hashes credentials and issues/validates bearer tokens.
///
/// # Contract
///
/// Implementations must:
/// - Never store or log the plaintext secret
/// - Return `AuthError::InvalidToken` / `TokenExpired` for bad tokens
/// - Return `AuthError::ProviderFailure` for internal failures
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Hashes a plaintext secret for storage.
    async fn hash_credential(&self, secret: &SecretString) -> Result<CredentialHash, AuthError>;

    /// Verifies a plaintext secret against a stored hash.
    ///
    /// A mismatch is `Ok(false)`, not an error; errors are reserved for
    /// provider failures.
    async fn verify_credential(
        &self,
        secret: &SecretString,
        hash: &CredentialHash,
    ) -> Result<bool, AuthError>;

    /// Issues a bearer token for the caller.
    async fn issue_token(&self, caller: &Caller) -> Result<String, AuthError>;

    /// Resolves a bearer token into the caller it was issued for.
    ///
    /// # Returns
    ///
    /// * `Ok(Caller)` - Token valid and unexpired
    /// * `Err(AuthError::InvalidToken)` - Malformed or bad signature
    /// * `Err(AuthError::TokenExpired)` - Signature fine, token expired
    async fn current_caller(&self, token: &str) -> Result<Caller, AuthError>;
}
