//! HTTP surface for the adoption workflow.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::AdoptionResponse;
pub use handlers::AdoptionHandlers;
pub use routes::adoption_routes;
