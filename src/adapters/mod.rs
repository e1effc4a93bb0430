//! Adapters - implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `auth` - JWT token issuing/validation and argon2 credential hashing
//! - `http` - axum routers, DTOs, middleware, and error mapping
//! - `memory` - in-memory record stores

pub mod auth;
pub mod http;
pub mod memory;

pub use auth::JwtAuthProvider;
pub use memory::InMemoryStore;
