//! Application layer - commands, queries, and the store bundle.
//!
//! This layer orchestrates domain operations through the ports: it
//! resolves references, enforces role policy, runs the adoption
//! workflow, and slices listings into pages. It never touches HTTP or
//! storage details.

pub mod handlers;
pub mod pagination;
pub mod reference;
pub mod store;

pub use pagination::{Page, PageRequest, DEFAULT_LIMIT};
pub use reference::require_exists;
pub use store::Store;
