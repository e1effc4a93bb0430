//! HTTP adapter.
//!
//! One router per entity, nested under `/api/v1`, each taking its
//! handler bundle as axum state. The bearer-token middleware wraps the
//! whole API; individual handlers opt into authentication with the
//! [`RequireAuth`] extractor, so `/auth/register` and `/auth/login`
//! stay public without a separate router tree.

pub mod adoptions;
pub mod auth;
pub mod care_events;
pub mod donations;
pub mod error;
pub mod feedback;
pub mod middleware;
pub mod pets;
pub mod users;

pub use error::ErrorResponse;
pub use middleware::{AuthState, RequireAuth};

use std::sync::Arc;
use std::time::Duration;

use axum::{http::HeaderValue, middleware::from_fn_with_state, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::application::handlers::adoptions::{
    workflow_lock, ReviewRequestHandler, SubmitRequestHandler,
};
use crate::application::handlers::care_events::{ScheduleEventHandler, UpdateEventHandler};
use crate::application::handlers::ledger::{
    LeaveFeedbackHandler, RecordDonationHandler, UpdateDonationHandler, UpdateFeedbackHandler,
};
use crate::application::handlers::pets::{CreatePetHandler, ListPetsHandler, UpdatePetHandler};
use crate::application::handlers::records::{
    GetRecordHandler, ListRecordsHandler, RemoveRecordHandler,
};
use crate::application::handlers::users::{
    LoginUserHandler, RegisterUserHandler, RemoveUserHandler, UpdateUserHandler,
};
use crate::application::Store;
use crate::ports::AuthProvider;

use adoptions::{adoption_routes, AdoptionHandlers};
use auth::{auth_routes, AuthHandlers};
use care_events::{care_event_routes, CareEventHandlers};
use donations::{donation_routes, DonationHandlers};
use feedback::{feedback_routes, FeedbackHandlers};
use middleware::auth_middleware;
use pets::{pet_routes, PetHandlers};
use users::{user_routes, UserHandlers};

/// Every handler bundle the API needs, wired over one [`Store`].
pub struct ApiHandlers {
    pub auth: AuthHandlers,
    pub users: UserHandlers,
    pub pets: PetHandlers,
    pub adoptions: AdoptionHandlers,
    pub care_events: CareEventHandlers,
    pub donations: DonationHandlers,
    pub feedback: FeedbackHandlers,
}

impl ApiHandlers {
    /// Wires every application handler over the shared stores.
    ///
    /// The submit and review adoption handlers share one workflow lock,
    /// so availability checks and status flips serialize.
    pub fn build(store: &Store, auth: Arc<dyn AuthProvider>) -> Self {
        let lock = workflow_lock();

        Self {
            auth: AuthHandlers::new(
                Arc::new(RegisterUserHandler::new(store.users.clone(), auth.clone())),
                Arc::new(LoginUserHandler::new(store.users.clone(), auth.clone())),
            ),
            users: UserHandlers::new(
                Arc::new(GetRecordHandler::new(store.users.clone())),
                Arc::new(ListRecordsHandler::new(store.users.clone())),
                Arc::new(UpdateUserHandler::new(store.users.clone())),
                Arc::new(RemoveUserHandler::new(store.users.clone())),
            ),
            pets: PetHandlers::new(
                Arc::new(CreatePetHandler::new(
                    store.pets.clone(),
                    store.users.clone(),
                )),
                Arc::new(ListPetsHandler::new(store.pets.clone())),
                Arc::new(GetRecordHandler::new(store.pets.clone())),
                Arc::new(UpdatePetHandler::new(store.pets.clone())),
                Arc::new(RemoveRecordHandler::new(store.pets.clone())),
            ),
            adoptions: AdoptionHandlers::new(
                Arc::new(SubmitRequestHandler::new(
                    store.adoptions.clone(),
                    store.pets.clone(),
                    store.users.clone(),
                    lock.clone(),
                )),
                Arc::new(ReviewRequestHandler::new(
                    store.adoptions.clone(),
                    store.pets.clone(),
                    lock,
                )),
                Arc::new(GetRecordHandler::new(store.adoptions.clone())),
                Arc::new(ListRecordsHandler::new(store.adoptions.clone())),
                Arc::new(RemoveRecordHandler::new(store.adoptions.clone())),
            ),
            care_events: CareEventHandlers::new(
                Arc::new(ScheduleEventHandler::new(
                    store.care_events.clone(),
                    store.users.clone(),
                )),
                Arc::new(ListRecordsHandler::new(store.care_events.clone())),
                Arc::new(GetRecordHandler::new(store.care_events.clone())),
                Arc::new(UpdateEventHandler::new(store.care_events.clone())),
                Arc::new(RemoveRecordHandler::new(store.care_events.clone())),
            ),
            donations: DonationHandlers::new(
                Arc::new(RecordDonationHandler::new(store.donations.clone())),
                Arc::new(ListRecordsHandler::new(store.donations.clone())),
                Arc::new(GetRecordHandler::new(store.donations.clone())),
                Arc::new(UpdateDonationHandler::new(store.donations.clone())),
                Arc::new(RemoveRecordHandler::new(store.donations.clone())),
            ),
            feedback: FeedbackHandlers::new(
                Arc::new(LeaveFeedbackHandler::new(
                    store.feedback.clone(),
                    store.users.clone(),
                    store.pets.clone(),
                    store.care_events.clone(),
                )),
                Arc::new(ListRecordsHandler::new(store.feedback.clone())),
                Arc::new(GetRecordHandler::new(store.feedback.clone())),
                Arc::new(UpdateFeedbackHandler::new(store.feedback.clone())),
                Arc::new(RemoveRecordHandler::new(store.feedback.clone())),
            ),
        }
    }
}

/// Assembles the full application router.
pub fn api_router(
    handlers: ApiHandlers,
    auth: AuthState,
    request_timeout: Duration,
    cors_origins: Vec<String>,
) -> Router {
    let api = Router::new()
        .nest("/auth", auth_routes(handlers.auth))
        .nest("/users", user_routes(handlers.users))
        .nest("/pets", pet_routes(handlers.pets))
        .nest("/adoptions", adoption_routes(handlers.adoptions))
        .nest("/care-events", care_event_routes(handlers.care_events))
        .nest("/feedback", feedback_routes(handlers.feedback))
        .nest("/donations", donation_routes(handlers.donations))
        .layer(from_fn_with_state(auth, auth_middleware));

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
        .layer(TimeoutLayer::new(request_timeout))
}

/// GET /health - liveness probe, no auth
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn cors_layer(origins: Vec<String>) -> CorsLayer {
    let parsed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    if parsed.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(parsed)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
