//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `user` - Platform accounts and roles
//! - `pet` - Pet listings and availability
//! - `adoption` - Adoption request lifecycle
//! - `care_event` - Organizer-hosted care events
//! - `feedback` - Rated comments on pets and events
//! - `donation` - Monetary contributions

pub mod adoption;
pub mod care_event;
pub mod donation;
pub mod feedback;
pub mod foundation;
pub mod pet;
pub mod user;
