//! HS256 bearer tokens via jsonwebtoken.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, Caller, Timestamp, UserId, UserRole};

/// Claims carried in every issued token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id the token was issued for.
    pub sub: UserId,
    /// Role the user held at issue time.
    pub role: UserRole,
    /// Issuer name, validated on decode.
    pub iss: String,
    /// Issued-at, Unix seconds.
    pub iat: u64,
    /// Expiry, Unix seconds.
    pub exp: u64,
}

/// Signing and verification keys plus token policy.
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    issuer: String,
    ttl_secs: u64,
}

impl TokenKeys {
    pub fn new(secret: &SecretString, issuer: impl Into<String>, ttl_secs: u64) -> Self {
        let secret = secret.expose_secret();
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            issuer: issuer.into(),
            ttl_secs,
        }
    }

    /// Signs a token for the caller.
    pub fn sign(&self, caller: &Caller) -> Result<String, AuthError> {
        let now = Timestamp::now();
        let claims = Claims {
            sub: caller.id,
            role: caller.role,
            iss: self.issuer.clone(),
            iat: now.as_unix_secs(),
            exp: now.plus_secs(self.ttl_secs).as_unix_secs(),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::provider_failure(format!("token signing failed: {e}")))
    }

    /// Verifies a token and returns its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::default();
        validation.set_issuer(std::slice::from_ref(&self.issuer));

        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            }
        })?;
        Ok(data.claims)
    }
}
