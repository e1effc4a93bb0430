//! HTTP handlers for pet endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, parse_path_id};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::pets::{
    CreatePetCommand, CreatePetHandler, ListPetsHandler, ListPetsQuery, UpdatePetCommand,
    UpdatePetHandler,
};
use crate::application::handlers::records::{GetRecordHandler, RemoveRecordHandler};
use crate::domain::foundation::PetId;
use crate::domain::pet::Pet;

use super::dto::{CreatePetRequest, ListPetsParams, PetResponse, UpdatePetRequest};

#[derive(Clone)]
pub struct PetHandlers {
    create_handler: Arc<CreatePetHandler>,
    list_handler: Arc<ListPetsHandler>,
    get_handler: Arc<GetRecordHandler<Pet>>,
    update_handler: Arc<UpdatePetHandler>,
    remove_handler: Arc<RemoveRecordHandler<Pet>>,
}

impl PetHandlers {
    pub fn new(
        create_handler: Arc<CreatePetHandler>,
        list_handler: Arc<ListPetsHandler>,
        get_handler: Arc<GetRecordHandler<Pet>>,
        update_handler: Arc<UpdatePetHandler>,
        remove_handler: Arc<RemoveRecordHandler<Pet>>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
            get_handler,
            update_handler,
            remove_handler,
        }
    }
}

/// POST /api/v1/pets - list a pet for adoption
pub async fn create_pet(
    State(handlers): State<PetHandlers>,
    RequireAuth(caller): RequireAuth,
    Json(req): Json<CreatePetRequest>,
) -> Response {
    let cmd = CreatePetCommand {
        caller,
        owner_id: req.owner_id,
        name: req.name,
        species: req.species,
        breed: req.breed,
        age: req.age,
        description: req.description,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(pet) => (StatusCode::CREATED, Json(PetResponse::from(pet))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/pets - filtered, paginated listing
pub async fn list_pets(
    State(handlers): State<PetHandlers>,
    RequireAuth(_caller): RequireAuth,
    Query(params): Query<ListPetsParams>,
) -> Response {
    let query = ListPetsQuery {
        species: params.species,
        status: params.status,
        page: params.page,
        limit: params.limit,
    };

    match handlers.list_handler.handle(query).await {
        Ok(page) => (StatusCode::OK, Json(page.map(PetResponse::from))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/pets/:id - fetch one pet
pub async fn get_pet(
    State(handlers): State<PetHandlers>,
    RequireAuth(_caller): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let pet_id: PetId = match parse_path_id(&id, "pet") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(&pet_id).await {
        Ok(pet) => (StatusCode::OK, Json(PetResponse::from(pet))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /api/v1/pets/:id - patch mutable fields
pub async fn update_pet(
    State(handlers): State<PetHandlers>,
    RequireAuth(_caller): RequireAuth,
    Path(id): Path<String>,
    Json(req): Json<UpdatePetRequest>,
) -> Response {
    let pet_id: PetId = match parse_path_id(&id, "pet") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = UpdatePetCommand {
        pet_id,
        patch: req.into(),
    };
    match handlers.update_handler.handle(cmd).await {
        Ok(pet) => (StatusCode::OK, Json(PetResponse::from(pet))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/v1/pets/:id - remove a listing
pub async fn remove_pet(
    State(handlers): State<PetHandlers>,
    RequireAuth(_caller): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let pet_id: PetId = match parse_path_id(&id, "pet") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.remove_handler.handle(&pet_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}
