//! Authentication adapter.
//!
//! Implements the `AuthProvider` port with argon2 credential hashing
//! and HS256 bearer tokens. The application layer only sees the port;
//! swapping the token scheme touches nothing outside this module.

mod password;
mod token;

pub use token::Claims;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthError, Caller, CredentialHash};
use crate::ports::AuthProvider;

use token::TokenKeys;

/// JWT + argon2 implementation of the `AuthProvider` port.
pub struct JwtAuthProvider {
    keys: TokenKeys,
}

impl JwtAuthProvider {
    /// Builds a provider from the auth configuration section.
    pub fn from_config(config: &AuthConfig) -> Self {
        let secret = SecretString::new(config.token_secret.clone());
        Self {
            keys: TokenKeys::new(&secret, config.token_issuer.clone(), config.token_ttl_secs),
        }
    }

    /// Builds a provider directly from a secret, for tests and tools.
    pub fn new(secret: &SecretString, issuer: impl Into<String>, ttl_secs: u64) -> Self {
        Self {
            keys: TokenKeys::new(secret, issuer, ttl_secs),
        }
    }
}

#[async_trait]
impl AuthProvider for JwtAuthProvider {
    async fn hash_credential(&self, secret: &SecretString) -> Result<CredentialHash, AuthError> {
        password::hash_secret(secret.expose_secret())
    }

    async fn verify_credential(
        &self,
        secret: &SecretString,
        hash: &CredentialHash,
    ) -> Result<bool, AuthError> {
        password::verify_secret(secret.expose_secret(), hash)
    }

    async fn issue_token(&self, caller: &Caller) -> Result<String, AuthError> {
        self.keys.sign(caller)
    }

    async fn current_caller(&self, token: &str) -> Result<Caller, AuthError> {
        let claims = self.keys.verify(token)?;
        Ok(Caller::new(claims.sub, claims.role))
    }
}
