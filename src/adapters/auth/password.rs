//! Argon2 credential hashing.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::domain::foundation::{AuthError, CredentialHash};

/// Hashes a plaintext secret with a fresh random salt.
pub fn hash_secret(plain: &str) -> Result<CredentialHash, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| AuthError::provider_failure(format!("argon2 hashing failed: {e}")))?;
    Ok(CredentialHash::new(hash.to_string()))
}

/// Verifies a plaintext secret against a stored PHC-format hash.
///
/// A mismatch is `Ok(false)`; only a malformed stored hash is an error.
pub fn verify_secret(plain: &str, stored: &CredentialHash) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(stored.as_str())
        .map_err(|e| AuthError::provider_failure(format!("stored hash is malformed: {e}")))?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}
