//! Donation aggregate entity.
//!
//! Donations record money given to the platform. Amounts are integer
//! cents, never floating point.
//!
//! # Donor reference
//!
//! `donor_id` is recorded as given and is not checked against the user
//! store. Anonymous or external donors land here with ids the platform
//! never saw.

use crate::domain::foundation::{DomainError, DonationId, Entity, ErrorCode, Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// Donation aggregate - a monetary contribution.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `amount_cents` is strictly positive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donation {
    /// Unique identifier for this donation.
    id: DonationId,

    /// Donor as reported; not validated against the user store.
    donor_id: UserId,

    /// Amount in cents.
    amount_cents: i64,

    /// When the donation was recorded.
    created_at: Timestamp,

    /// When the record was last updated.
    updated_at: Timestamp,
}

/// Whitelisted mutable fields for a donation update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationPatch {
    pub amount_cents: Option<i64>,
}

impl DonationPatch {
    /// Returns true if the patch carries no changes.
    pub fn is_empty(&self) -> bool {
        self.amount_cents.is_none()
    }
}

impl Donation {
    /// Create a new donation record.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if the amount is zero or negative
    pub fn new(id: DonationId, donor_id: UserId, amount_cents: i64) -> Result<Self, DomainError> {
        Self::validate_amount(amount_cents)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            donor_id,
            amount_cents,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a donation from persistence (no validation).
    pub fn reconstitute(
        id: DonationId,
        donor_id: UserId,
        amount_cents: i64,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            donor_id,
            amount_cents,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the donation ID.
    pub fn id(&self) -> &DonationId {
        &self.id
    }

    /// Returns the reported donor ID.
    pub fn donor_id(&self) -> &UserId {
        &self.donor_id
    }

    /// Returns the amount in cents.
    pub fn amount_cents(&self) -> i64 {
        self.amount_cents
    }

    /// Returns when the donation was recorded.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the record was last updated.
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
    /// - `OutOfRange` if a patched amount is zero or negative
    pub fn apply_patch(&mut self, patch: DonationPatch) -> Result<(), DomainError> {
        if let Some(amount_cents) = patch.amount_cents {
            Self::validate_amount(amount_cents)?;
            self.amount_cents = amount_cents;
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }

    fn validate_amount(amount_cents: i64) -> Result<(), DomainError> {
        if amount_cents <= 0 {
            return Err(DomainError::new(
                ErrorCode::OutOfRange,
                "Donation amount must be positive",
            )
            .with_detail("field", "amount_cents")
            .with_detail("actual", amount_cents.to_string()));
        }
        Ok(())
    }
}

impl Entity for Donation {
    type Id = DonationId;
    const KIND: &'static str = "Donation";

    fn entity_id(&self) -> &DonationId {
        &self.id
    }
}
