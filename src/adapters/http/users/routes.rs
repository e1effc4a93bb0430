//! HTTP routes for user endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_user, list_users, remove_user, update_user, UserHandlers};

/// Creates the user router.
pub fn user_routes(handlers: UserHandlers) -> Router {
    Router::new()
        .route("/", get(list_users))
        .route("/:id", get(get_user).put(update_user).delete(remove_user))
        .with_state(handlers)
}
