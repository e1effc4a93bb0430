//! User aggregate entity.
//!
//! Users are the actors of the platform: owners and shelters list pets,
//! adopters file adoption requests, admins moderate.
//!
//! # Identity
//!
//! `contact` doubles as the login key. Uniqueness across users is
//! enforced by the user service, not by this type.

use crate::domain::foundation::{
    CredentialHash, DomainError, Entity, Timestamp, UserId, UserRole,
};
use serde::{Deserialize, Serialize};

/// Maximum length for a user's display name.
pub const MAX_NAME_LENGTH: usize = 100;

/// User aggregate - an account on the platform.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `name` is 1-100 characters, non-empty
/// - `contact` is non-empty
/// - `credential` only ever holds a hash, never a plaintext secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for this user.
    id: UserId,

    /// Display name.
    name: String,

    /// Contact address used as the login key.
    contact: String,

    /// Access level on the platform.
    role: UserRole,

    /// Hashed login credential.
    credential: CredentialHash,

    /// When the account was created.
    created_at: Timestamp,

    /// When the account was last updated.
    updated_at: Timestamp,
}

/// Whitelisted mutable fields for a user update.
///
/// Everything absent from the patch is left untouched; identifiers,
/// role, credential, and timestamps are never patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub contact: Option<String>,
}

impl UserPatch {
    /// Returns true if the patch carries no changes.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.contact.is_none()
    }
}

impl User {
    /// Create a new user account.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if name or contact is empty, or name too long
    pub fn new(
        id: UserId,
        name: String,
        contact: String,
        role: UserRole,
        credential: CredentialHash,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;
        Self::validate_contact(&contact)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            name,
            contact,
            role,
            credential,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a user from persistence (no validation).
    pub fn reconstitute(
        id: UserId,
        name: String,
        contact: String,
        role: UserRole,
        credential: CredentialHash,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            contact,
            role,
            credential,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the user ID.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contact address.
    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Returns the role.
    pub fn role(&self) -> UserRole {
        self.role
    }

    /// Returns the hashed credential.
    pub fn credential(&self) -> &CredentialHash {
        &self.credential
    }

    /// Returns when the account was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the account was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply a patch of whitelisted fields.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if a patched name or contact fails validation
    pub fn apply_patch(&mut self, patch: UserPatch) -> Result<(), DomainError> {
        if let Some(name) = patch.name {
            Self::validate_name(&name)?;
            self.name = name;
        }
        if let Some(contact) = patch.contact {
            Self::validate_contact(&contact)?;
            self.contact = contact;
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("name", "Name cannot be empty"));
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(
                "name",
                format!("Name must be {} characters or less", MAX_NAME_LENGTH),
            ));
        }
        Ok(())
    }

    fn validate_contact(contact: &str) -> Result<(), DomainError> {
        if contact.trim().is_empty() {
            return Err(DomainError::validation(
                "contact",
                "Contact cannot be empty",
            ));
        }
        Ok(())
    }
}

impl Entity for User {
    type Id = UserId;
    const KIND: &'static str = "User";

    fn entity_id(&self) -> &UserId {
        &self.id
    }
}
