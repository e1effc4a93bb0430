//! HTTP surface for user accounts.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::UserResponse;
pub use handlers::UserHandlers;
pub use routes::user_routes;
