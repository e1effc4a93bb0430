//! HTTP routes for feedback endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    get_feedback, leave_feedback, list_feedback, remove_feedback, update_feedback,
    FeedbackHandlers,
};

/// Creates the feedback router.
pub fn feedback_routes(handlers: FeedbackHandlers) -> Router {
    Router::new()
        .route("/", get(list_feedback).post(leave_feedback))
        .route(
            "/:id",
            get(get_feedback).put(update_feedback).delete(remove_feedback),
        )
        .with_state(handlers)
}
