//! HTTP surface for registration, login, and the token check.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::AuthHandlers;
pub use routes::auth_routes;
