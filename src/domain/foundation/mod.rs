//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the PawHaven domain.

mod auth;
mod entity;
mod errors;
mod ids;
mod rating;
mod role;
mod state_machine;
mod timestamp;

pub use auth::{AuthError, Caller, CredentialHash};
pub use entity::Entity;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{DonationId, EventId, FeedbackId, PetId, RequestId, UserId};
pub use rating::Rating;
pub use role::UserRole;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
