//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `RecordStore` - Generic keyed record persistence, one store per entity
//!
//! ## Auth Ports
//!
//! - `AuthProvider` - Credential hashing plus token issue/validation

mod auth_provider;
mod record_store;

pub use auth_provider::AuthProvider;
pub use record_store::{DynRecordStore, RecordStore};
