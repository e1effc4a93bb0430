//! HTTP handlers for adoption endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, parse_path_id};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::adoptions::{
    ReviewRequestCommand, ReviewRequestHandler, SubmitRequestCommand, SubmitRequestHandler,
};
use crate::application::handlers::records::{
    GetRecordHandler, ListRecordsHandler, ListRecordsQuery, RemoveRecordHandler,
};
use crate::domain::adoption::AdoptionRequest;
use crate::domain::foundation::RequestId;

use super::dto::{
    AdoptionResponse, ListAdoptionsParams, ReviewAdoptionRequest, SubmitAdoptionRequest,
};

#[derive(Clone)]
pub struct AdoptionHandlers {
    submit_handler: Arc<SubmitRequestHandler>,
    review_handler: Arc<ReviewRequestHandler>,
    get_handler: Arc<GetRecordHandler<AdoptionRequest>>,
    list_handler: Arc<ListRecordsHandler<AdoptionRequest>>,
    remove_handler: Arc<RemoveRecordHandler<AdoptionRequest>>,
}

impl AdoptionHandlers {
    pub fn new(
        submit_handler: Arc<SubmitRequestHandler>,
        review_handler: Arc<ReviewRequestHandler>,
        get_handler: Arc<GetRecordHandler<AdoptionRequest>>,
        list_handler: Arc<ListRecordsHandler<AdoptionRequest>>,
        remove_handler: Arc<RemoveRecordHandler<AdoptionRequest>>,
    ) -> Self {
        Self {
            submit_handler,
            review_handler,
            get_handler,
            list_handler,
            remove_handler,
        }
    }
}

/// POST /api/v1/adoptions - file an adoption request
pub async fn submit_adoption(
    State(handlers): State<AdoptionHandlers>,
    RequireAuth(_caller): RequireAuth,
    Json(req): Json<SubmitAdoptionRequest>,
) -> Response {
    let cmd = SubmitRequestCommand {
        pet_id: req.pet_id,
        adopter_id: req.adopter_id,
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(request) => {
            (StatusCode::CREATED, Json(AdoptionResponse::from(request))).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/adoptions - paginated request listing
pub async fn list_adoptions(
    State(handlers): State<AdoptionHandlers>,
    RequireAuth(_caller): RequireAuth,
    Query(params): Query<ListAdoptionsParams>,
) -> Response {
    let query = ListRecordsQuery {
        page: params.page,
        limit: params.limit,
    };
    match handlers.list_handler.handle(query).await {
        Ok(page) => (StatusCode::OK, Json(page.map(AdoptionResponse::from))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/adoptions/:id - fetch one request
pub async fn get_adoption(
    State(handlers): State<AdoptionHandlers>,
    RequireAuth(_caller): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let request_id: RequestId = match parse_path_id(&id, "request") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(&request_id).await {
        Ok(request) => (StatusCode::OK, Json(AdoptionResponse::from(request))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PATCH /api/v1/adoptions/:id/status - approve or reject a request
pub async fn review_adoption(
    State(handlers): State<AdoptionHandlers>,
    RequireAuth(caller): RequireAuth,
    Path(id): Path<String>,
    Json(req): Json<ReviewAdoptionRequest>,
) -> Response {
    let request_id: RequestId = match parse_path_id(&id, "request") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let target = match req.target() {
        Ok(target) => target,
        Err(e) => return domain_error_response(e),
    };

    let cmd = ReviewRequestCommand {
        caller,
        request_id,
        target,
    };
    match handlers.review_handler.handle(cmd).await {
        Ok(request) => (StatusCode::OK, Json(AdoptionResponse::from(request))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/v1/adoptions/:id - withdraw a request
pub async fn remove_adoption(
    State(handlers): State<AdoptionHandlers>,
    RequireAuth(_caller): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let request_id: RequestId = match parse_path_id(&id, "request") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.remove_handler.handle(&request_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}
