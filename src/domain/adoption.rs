//! AdoptionRequest aggregate entity.
//!
//! An adoption request links an adopter to a pet and moves through a
//! three-state lifecycle: Pending, then either Approved or Rejected.
//! Both outcomes are terminal.
//!
//! # Consistency
//!
//! Approving a request also flips the referenced pet to `Adopted`.
//! That cross-entity write is coordinated by the adoption workflow
//! service; this type only guards its own lifecycle.

use crate::domain::foundation::{
    DomainError, Entity, ErrorCode, PetId, RequestId, StateMachine, Timestamp, UserId,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of an adoption request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl StateMachine for RequestStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use RequestStatus::*;
        matches!((self, target), (Pending, Approved) | (Pending, Rejected))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use RequestStatus::*;
        match self {
            Pending => vec![Approved, Rejected],
            Approved | Rejected => vec![],
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
        };
        write!(f, "{}", s)
    }
}

/// AdoptionRequest aggregate - an adopter's bid for a pet.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `approved_at` is set if and only if `status` is `Approved`
/// - Approved and Rejected are terminal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdoptionRequest {
    /// Unique identifier for this request.
    id: RequestId,

    /// Pet the adopter wants.
    pet_id: PetId,

    /// User filing the request.
    adopter_id: UserId,

    /// Current lifecycle status.
    status: RequestStatus,

    /// When the request was filed.
    requested_at: Timestamp,

    /// When the request was approved, if it was.
    approved_at: Option<Timestamp>,

    /// When the record was created.
    created_at: Timestamp,
}

impl AdoptionRequest {
    /// Create a new pending request.
    pub fn new(id: RequestId, pet_id: PetId, adopter_id: UserId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            pet_id,
            adopter_id,
            status: RequestStatus::Pending,
            requested_at: now,
            approved_at: None,
            created_at: now,
        }
    }

    /// Reconstitute a request from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: RequestId,
        pet_id: PetId,
        adopter_id: UserId,
        status: RequestStatus,
        requested_at: Timestamp,
        approved_at: Option<Timestamp>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            pet_id,
            adopter_id,
            status,
            requested_at,
            approved_at,
            created_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the request ID.
    pub fn id(&self) -> &RequestId {
        &self.id
    }

    /// Returns the requested pet's ID.
    pub fn pet_id(&self) -> &PetId {
        &self.pet_id
    }

    /// Returns the adopter's user ID.
    pub fn adopter_id(&self) -> &UserId {
        &self.adopter_id
    }

    /// Returns the current status.
    pub fn status(&self) -> RequestStatus {
        self.status
    }

    /// Returns when the request was filed.
    pub fn requested_at(&self) -> &Timestamp {
        &self.requested_at
    }

    /// Returns the approval time, if approved.
    pub fn approved_at(&self) -> Option<&Timestamp> {
        self.approved_at.as_ref()
    }

    /// Returns when the record was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns true if the request has reached a terminal status.
    pub fn is_settled(&self) -> bool {
        self.status.is_terminal()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Approve the request, stamping the approval time.
    ///
    /// # Errors
    ///
    /// - `InvalidStatus` if the request is not pending
    pub fn approve(&mut self) -> Result<(), DomainError> {
        self.status = self.checked_transition(RequestStatus::Approved)?;
        self.approved_at = Some(Timestamp::now());
        Ok(())
    }

    /// Reject the request. `approved_at` stays unset.
    ///
    /// # Errors
    ///
    /// - `InvalidStatus` if the request is not pending
    pub fn reject(&mut self) -> Result<(), DomainError> {
        self.status = self.checked_transition(RequestStatus::Rejected)?;
        Ok(())
    }

    fn checked_transition(&self, target: RequestStatus) -> Result<RequestStatus, DomainError> {
        self.status.transition_to(target).map_err(|_| {
            DomainError::new(
                ErrorCode::InvalidStatus,
                format!("Cannot move request from {} to {}", self.status, target),
            )
            .with_detail("request_id", self.id.to_string())
            .with_detail("from", self.status.to_string())
            .with_detail("to", target.to_string())
        })
    }
}

impl Entity for AdoptionRequest {
    type Id = RequestId;
    const KIND: &'static str = "AdoptionRequest";

    fn entity_id(&self) -> &RequestId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_request() -> AdoptionRequest {
        AdoptionRequest::new(RequestId::new(), PetId::new(), UserId::new())
    }

    // Construction tests

    #[test]
    fn new_request_is_pending() {
        let request = test_request();
        assert_eq!(request.status(), RequestStatus::Pending);
        assert!(request.approved_at().is_none());
        assert!(!request.is_settled());
    }

    #[test]
    fn new_request_stamps_requested_at() {
        let request = test_request();
        assert_eq!(request.requested_at(), request.created_at());
    }

    // Approval tests

    #[test]
    fn approve_sets_status_and_timestamp() {
        let mut request = test_request();
        request.approve().unwrap();

        assert_eq!(request.status(), RequestStatus::Approved);
        assert!(request.approved_at().is_some());
        assert!(request.is_settled());
    }

    #[test]
    fn approve_twice_fails() {
        let mut request = test_request();
        request.approve().unwrap();
        assert!(request.approve().is_err());
    }

    // Rejection tests

    #[test]
    fn reject_leaves_approved_at_unset() {
        let mut request = test_request();
        request.reject().unwrap();

        assert_eq!(request.status(), RequestStatus::Rejected);
        assert!(request.approved_at().is_none());
        assert!(request.is_settled());
    }

    #[test]
    fn reject_then_approve_fails() {
        let mut request = test_request();
        request.reject().unwrap();
        let result = request.approve();
        assert!(result.is_err());
        assert_eq!(request.status(), RequestStatus::Rejected);
    }

    // Status machine tests

    #[test]
    fn pending_can_reach_both_outcomes() {
        assert_eq!(
            RequestStatus::Pending.valid_transitions(),
            vec![RequestStatus::Approved, RequestStatus::Rejected]
        );
    }

    #[test]
    fn outcomes_are_terminal() {
        assert!(RequestStatus::Approved.is_terminal());
        assert!(RequestStatus::Rejected.is_terminal());
        assert!(!RequestStatus::Pending.is_terminal());
    }

    #[test]
    fn pending_is_never_a_valid_target() {
        assert!(!RequestStatus::Approved.can_transition_to(&RequestStatus::Pending));
        assert!(!RequestStatus::Rejected.can_transition_to(&RequestStatus::Pending));
        assert!(!RequestStatus::Pending.can_transition_to(&RequestStatus::Pending));
    }

    // Serialization tests

    #[test]
    fn status_serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&RequestStatus::Approved).unwrap(),
            "\"approved\""
        );
    }

    #[test]
    fn request_round_trips_through_json() {
        let mut request = test_request();
        request.approve().unwrap();

        let json = serde_json::to_string(&request).unwrap();
        let back: AdoptionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
