//! HTTP handlers for user endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, parse_path_id};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::records::{
    GetRecordHandler, ListRecordsHandler, ListRecordsQuery,
};
use crate::application::handlers::users::{
    RemoveUserCommand, RemoveUserHandler, UpdateUserCommand, UpdateUserHandler,
};
use crate::domain::foundation::UserId;
use crate::domain::user::User;

use super::dto::{ListUsersParams, UpdateUserRequest, UserResponse};

#[derive(Clone)]
pub struct UserHandlers {
    get_handler: Arc<GetRecordHandler<User>>,
    list_handler: Arc<ListRecordsHandler<User>>,
    update_handler: Arc<UpdateUserHandler>,
    remove_handler: Arc<RemoveUserHandler>,
}

impl UserHandlers {
    pub fn new(
        get_handler: Arc<GetRecordHandler<User>>,
        list_handler: Arc<ListRecordsHandler<User>>,
        update_handler: Arc<UpdateUserHandler>,
        remove_handler: Arc<RemoveUserHandler>,
    ) -> Self {
        Self {
            get_handler,
            list_handler,
            update_handler,
            remove_handler,
        }
    }
}

/// GET /api/v1/users - paginated user listing
pub async fn list_users(
    State(handlers): State<UserHandlers>,
    RequireAuth(_caller): RequireAuth,
    Query(params): Query<ListUsersParams>,
) -> Response {
    let query = ListRecordsQuery {
        page: params.page,
        limit: params.limit,
    };
    match handlers.list_handler.handle(query).await {
        Ok(page) => (StatusCode::OK, Json(page.map(UserResponse::from))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/users/:id - fetch one user
pub async fn get_user(
    State(handlers): State<UserHandlers>,
    RequireAuth(_caller): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let user_id: UserId = match parse_path_id(&id, "user") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(&user_id).await {
        Ok(user) => (StatusCode::OK, Json(UserResponse::from(user))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /api/v1/users/:id - patch mutable fields
pub async fn update_user(
    State(handlers): State<UserHandlers>,
    RequireAuth(_caller): RequireAuth,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Response {
    let user_id: UserId = match parse_path_id(&id, "user") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = UpdateUserCommand {
        user_id,
        patch: req.into(),
    };
    match handlers.update_handler.handle(cmd).await {
        Ok(user) => (StatusCode::OK, Json(UserResponse::from(user))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/v1/users/:id - remove an account
pub async fn remove_user(
    State(handlers): State<UserHandlers>,
    RequireAuth(caller): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let user_id: UserId = match parse_path_id(&id, "user") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = RemoveUserCommand { caller, user_id };
    match handlers.remove_handler.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}
