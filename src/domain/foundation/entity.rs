//! Entity trait for aggregate roots held in record stores.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Implemented by aggregate roots that live in a record store.
///
/// The associated `Id` keys the store; `KIND` names the entity in
/// error details ("Pet not found" rather than "record not found").
pub trait Entity: Clone + Send + Sync + 'static {
    /// Identifier type for this entity.
    type Id: Clone + Copy + Eq + Hash + Debug + Display + Send + Sync + 'static;

    /// Entity kind used in error details, e.g. "Pet".
    const KIND: &'static str;

    /// Returns the entity's identifier.
    fn entity_id(&self) -> &Self::Id;
}
