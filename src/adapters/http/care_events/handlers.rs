//! HTTP handlers for care event endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, parse_path_id};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::care_events::{
    ScheduleEventCommand, ScheduleEventHandler, UpdateEventCommand, UpdateEventHandler,
};
use crate::application::handlers::records::{
    GetRecordHandler, ListRecordsHandler, ListRecordsQuery, RemoveRecordHandler,
};
use crate::domain::care_event::PetCareEvent;
use crate::domain::foundation::EventId;

use super::dto::{CareEventResponse, ListEventsParams, ScheduleEventRequest, UpdateEventRequest};

#[derive(Clone)]
pub struct CareEventHandlers {
    schedule_handler: Arc<ScheduleEventHandler>,
    list_handler: Arc<ListRecordsHandler<PetCareEvent>>,
    get_handler: Arc<GetRecordHandler<PetCareEvent>>,
    update_handler: Arc<UpdateEventHandler>,
    remove_handler: Arc<RemoveRecordHandler<PetCareEvent>>,
}

impl CareEventHandlers {
    pub fn new(
        schedule_handler: Arc<ScheduleEventHandler>,
        list_handler: Arc<ListRecordsHandler<PetCareEvent>>,
        get_handler: Arc<GetRecordHandler<PetCareEvent>>,
        update_handler: Arc<UpdateEventHandler>,
        remove_handler: Arc<RemoveRecordHandler<PetCareEvent>>,
    ) -> Self {
        Self {
            schedule_handler,
            list_handler,
            get_handler,
            update_handler,
            remove_handler,
        }
    }
}

/// POST /api/v1/care-events - schedule a care event
pub async fn schedule_event(
    State(handlers): State<CareEventHandlers>,
    RequireAuth(_caller): RequireAuth,
    Json(req): Json<ScheduleEventRequest>,
) -> Response {
    let cmd = ScheduleEventCommand {
        title: req.title,
        description: req.description,
        date_time: req.date_time,
        location: req.location,
        organizer_id: req.organizer_id,
    };

    match handlers.schedule_handler.handle(cmd).await {
        Ok(event) => (StatusCode::CREATED, Json(CareEventResponse::from(event))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/care-events - paginated event listing
pub async fn list_events(
    State(handlers): State<CareEventHandlers>,
    RequireAuth(_caller): RequireAuth,
    Query(params): Query<ListEventsParams>,
) -> Response {
    let query = ListRecordsQuery {
        page: params.page,
        limit: params.limit,
    };
    match handlers.list_handler.handle(query).await {
        Ok(page) => (StatusCode::OK, Json(page.map(CareEventResponse::from))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/care-events/:id - fetch one event
pub async fn get_event(
    State(handlers): State<CareEventHandlers>,
    RequireAuth(_caller): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let event_id: EventId = match parse_path_id(&id, "event") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(&event_id).await {
        Ok(event) => (StatusCode::OK, Json(CareEventResponse::from(event))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /api/v1/care-events/:id - patch mutable fields
pub async fn update_event(
    State(handlers): State<CareEventHandlers>,
    RequireAuth(_caller): RequireAuth,
    Path(id): Path<String>,
    Json(req): Json<UpdateEventRequest>,
) -> Response {
    let event_id: EventId = match parse_path_id(&id, "event") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = UpdateEventCommand {
        event_id,
        patch: req.into(),
    };
    match handlers.update_handler.handle(cmd).await {
        Ok(event) => (StatusCode::OK, Json(CareEventResponse::from(event))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/v1/care-events/:id - cancel an event
pub async fn remove_event(
    State(handlers): State<CareEventHandlers>,
    RequireAuth(_caller): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let event_id: EventId = match parse_path_id(&id, "event") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.remove_handler.handle(&event_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}
