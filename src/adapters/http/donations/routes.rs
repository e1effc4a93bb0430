//! HTTP routes for donation endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    get_donation, list_donations, record_donation, remove_donation, update_donation,
    DonationHandlers,
};

/// Creates the donation router.
pub fn donation_routes(handlers: DonationHandlers) -> Router {
    Router::new()
        .route("/", get(list_donations).post(record_donation))
        .route(
            "/:id",
            get(get_donation).put(update_donation).delete(remove_donation),
        )
        .with_state(handlers)
}
