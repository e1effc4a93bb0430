//! HTTP routes for adoption endpoints.

use axum::{
    routing::{get, patch},
    Router,
};

use super::handlers::{
    get_adoption, list_adoptions, remove_adoption, review_adoption, submit_adoption,
    AdoptionHandlers,
};

/// Creates the adoption router.
pub fn adoption_routes(handlers: AdoptionHandlers) -> Router {
    Router::new()
        .route("/", get(list_adoptions).post(submit_adoption))
        .route("/:id", get(get_adoption).delete(remove_adoption))
        .route("/:id/status", patch(review_adoption))
        .with_state(handlers)
}
