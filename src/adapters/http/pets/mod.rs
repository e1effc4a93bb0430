//! HTTP surface for pet listings.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::PetResponse;
pub use handlers::PetHandlers;
pub use routes::pet_routes;
