//! HTTP handlers for donation endpoints.

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
    RecordDonationCommand, RecordDonationHandler, UpdateDonationCommand, UpdateDonationHandler,
};
use crate::application::handlers::records::{
    GetRecordHandler, ListRecordsHandler, ListRecordsQuery, RemoveRecordHandler,
};
use crate::domain::donation::Donation;
use crate::domain::foundation::DonationId;

use super::dto::{
    DonationResponse, ListDonationsParams, RecordDonationRequest, UpdateDonationRequest,
};

#[derive(Clone)]
pub struct DonationHandlers {
    record_handler: Arc<RecordDonationHandler>,
    list_handler: Arc<ListRecordsHandler<Donation>>,
    get_handler: Arc<GetRecordHandler<Donation>>,
    update_handler: Arc<UpdateDonationHandler>,
    remove_handler: Arc<RemoveRecordHandler<Donation>>,
}

impl DonationHandlers {
    pub fn new(
        record_handler: Arc<RecordDonationHandler>,
        list_handler: Arc<ListRecordsHandler<Donation>>,
        get_handler: Arc<GetRecordHandler<Donation>>,
        update_handler: Arc<UpdateDonationHandler>,
        remove_handler: Arc<RemoveRecordHandler<Donation>>,
    ) -> Self {
        Self {
            record_handler,
            list_handler,
            get_handler,
            update_handler,
            remove_handler,
        }
    }
}

/// POST /api/v1/donations - record a donation
pub async fn record_donation(
    State(handlers): State<DonationHandlers>,
    RequireAuth(_caller): RequireAuth,
    Json(req): Json<RecordDonationRequest>,
) -> Response {
    let cmd = RecordDonationCommand {
        donor_id: req.donor_id,
        amount_cents: req.amount_cents,
    };

    match handlers.record_handler.handle(cmd).await {
        Ok(donation) => {
            (StatusCode::CREATED, Json(DonationResponse::from(donation))).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/donations - paginated donation listing
pub async fn list_donations(
    State(handlers): State<DonationHandlers>,
    RequireAuth(_caller): RequireAuth,
    Query(params): Query<ListDonationsParams>,
) -> Response {
    let query = ListRecordsQuery {
        page: params.page,
        limit: params.limit,
    };
    match handlers.list_handler.handle(query).await {
        Ok(page) => (StatusCode::OK, Json(page.map(DonationResponse::from))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/donations/:id - fetch one donation
pub async fn get_donation(
    State(handlers): State<DonationHandlers>,
    RequireAuth(_caller): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let donation_id: DonationId = match parse_path_id(&id, "donation") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(&donation_id).await {
        Ok(donation) => (StatusCode::OK, Json(DonationResponse::from(donation))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /api/v1/donations/:id - correct the amount
pub async fn update_donation(
    State(handlers): State<DonationHandlers>,
    RequireAuth(_caller): RequireAuth,
    Path(id): Path<String>,
    Json(req): Json<UpdateDonationRequest>,
) -> Response {
    let donation_id: DonationId = match parse_path_id(&id, "donation") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = UpdateDonationCommand {
        donation_id,
        patch: req.into(),
    };
    match handlers.update_handler.handle(cmd).await {
        Ok(donation) => (StatusCode::OK, Json(DonationResponse::from(donation))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/v1/donations/:id - remove a ledger entry
pub async fn remove_donation(
    State(handlers): State<DonationHandlers>,
    RequireAuth(_caller): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let donation_id: DonationId = match parse_path_id(&id, "donation") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.remove_handler.handle(&donation_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}
