//! HTTP surface for the donation ledger.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::DonationResponse;
pub use handlers::DonationHandlers;
pub use routes::donation_routes;
