//! HTTP handlers for feedback endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, parse_path_id};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::ledger::{
    LeaveFeedbackCommand, LeaveFeedbackHandler, UpdateFeedbackCommand, UpdateFeedbackHandler,
};
use crate::application::handlers::records::{
    GetRecordHandler, ListRecordsHandler, ListRecordsQuery, RemoveRecordHandler,
};
use crate::domain::feedback::Feedback;
use crate::domain::foundation::FeedbackId;

use super::dto::{
    FeedbackResponse, LeaveFeedbackRequest, ListFeedbackParams, UpdateFeedbackRequest,
};

#[derive(Clone)]
pub struct FeedbackHandlers {
    leave_handler: Arc<LeaveFeedbackHandler>,
    list_handler: Arc<ListRecordsHandler<Feedback>>,
    get_handler: Arc<GetRecordHandler<Feedback>>,
    update_handler: Arc<UpdateFeedbackHandler>,
    remove_handler: Arc<RemoveRecordHandler<Feedback>>,
}

impl FeedbackHandlers {
    pub fn new(
        leave_handler: Arc<LeaveFeedbackHandler>,
        list_handler: Arc<ListRecordsHandler<Feedback>>,
        get_handler: Arc<GetRecordHandler<Feedback>>,
        update_handler: Arc<UpdateFeedbackHandler>,
        remove_handler: Arc<RemoveRecordHandler<Feedback>>,
    ) -> Self {
        Self {
            leave_handler,
            list_handler,
            get_handler,
            update_handler,
            remove_handler,
        }
    }
}

/// POST /api/v1/feedback - leave feedback
pub async fn leave_feedback(
    State(handlers): State<FeedbackHandlers>,
    RequireAuth(_caller): RequireAuth,
    Json(req): Json<LeaveFeedbackRequest>,
) -> Response {
    let rating = match req.rating() {
        Ok(rating) => rating,
        Err(e) => return domain_error_response(e),
    };

    let cmd = LeaveFeedbackCommand {
        user_id: req.user_id,
        pet_id: req.pet_id,
        event_id: req.event_id,
        text: req.text,
        rating,
    };

    match handlers.leave_handler.handle(cmd).await {
        Ok(feedback) => {
            (StatusCode::CREATED, Json(FeedbackResponse::from(feedback))).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/feedback - paginated feedback listing
pub async fn list_feedback(
    State(handlers): State<FeedbackHandlers>,
    RequireAuth(_caller): RequireAuth,
    Query(params): Query<ListFeedbackParams>,
) -> Response {
    let query = ListRecordsQuery {
        page: params.page,
        limit: params.limit,
    };
    match handlers.list_handler.handle(query).await {
        Ok(page) => (StatusCode::OK, Json(page.map(FeedbackResponse::from))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/feedback/:id - fetch one entry
pub async fn get_feedback(
    State(handlers): State<FeedbackHandlers>,
    RequireAuth(_caller): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let feedback_id: FeedbackId = match parse_path_id(&id, "feedback") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(&feedback_id).await {
        Ok(feedback) => (StatusCode::OK, Json(FeedbackResponse::from(feedback))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /api/v1/feedback/:id - patch text and/or rating
pub async fn update_feedback(
    State(handlers): State<FeedbackHandlers>,
    RequireAuth(_caller): RequireAuth,
    Path(id): Path<String>,
    Json(req): Json<UpdateFeedbackRequest>,
) -> Response {
    let feedback_id: FeedbackId = match parse_path_id(&id, "feedback") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let patch = match req.into_patch() {
        Ok(patch) => patch,
        Err(e) => return domain_error_response(e),
    };

    let cmd = UpdateFeedbackCommand { feedback_id, patch };
    match handlers.update_handler.handle(cmd).await {
        Ok(feedback) => (StatusCode::OK, Json(FeedbackResponse::from(feedback))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/v1/feedback/:id - remove an entry
pub async fn remove_feedback(
    State(handlers): State<FeedbackHandlers>,
    RequireAuth(_caller): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let feedback_id: FeedbackId = match parse_path_id(&id, "feedback") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.remove_handler.handle(&feedback_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}
