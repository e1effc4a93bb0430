//! HTTP routes for care event endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    get_event, list_events, remove_event, schedule_event, update_event, CareEventHandlers,
};

/// Creates the care event router.
pub fn care_event_routes(handlers: CareEventHandlers) -> Router {
    Router::new()
        .route("/", get(list_events).post(schedule_event))
        .route("/:id", get(get_event).put(update_event).delete(remove_event))
        .with_state(handlers)
}
