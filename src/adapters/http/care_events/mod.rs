//! HTTP surface for pet care events.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::CareEventResponse;
pub use handlers::CareEventHandlers;
pub use routes::care_event_routes;
