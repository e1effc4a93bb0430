//! HTTP surface for feedback entries.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::FeedbackResponse;
pub use handlers::FeedbackHandlers;
pub use routes::feedback_routes;
