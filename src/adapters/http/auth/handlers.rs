//! HTTP handlers for auth endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use secrecy::SecretString;

use crate::adapters::http::error::domain_error_response;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::users::UserResponse;
use crate::application::handlers::users::{
    LoginUserCommand, LoginUserHandler, RegisterUserCommand, RegisterUserHandler,
};

use super::dto::{CallerResponse, LoginRequest, LoginResponse, RegisterRequest};

#[derive(Clone)]
pub struct AuthHandlers {
    register_handler: Arc<RegisterUserHandler>,
    login_handler: Arc<LoginUserHandler>,
}

impl AuthHandlers {
    pub fn new(
        register_handler: Arc<RegisterUserHandler>,
        login_handler: Arc<LoginUserHandler>,
    ) -> Self {
        Self {
            register_handler,
            login_handler,
        }
    }
}

/// POST /api/v1/auth/register - create an account
pub async fn register(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<RegisterRequest>,
) -> Response {
    let cmd = RegisterUserCommand {
        name: req.name,
        contact: req.contact,
        role: req.role,
        secret: SecretString::new(req.secret),
    };

    match handlers.register_handler.handle(cmd).await {
        Ok(user) => (StatusCode::CREATED, Json(UserResponse::from(user))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/v1/auth/login - exchange credentials for a token
pub async fn login(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<LoginRequest>,
) -> Response {
    let cmd = LoginUserCommand {
        contact: req.contact,
        secret: SecretString::new(req.secret),
    };

    match handlers.login_handler.handle(cmd).await {
        Ok(result) => {
            let response = LoginResponse {
                token: result.token,
                user: UserResponse::from(result.user),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/auth/me - the login-token check
pub async fn me(RequireAuth(caller): RequireAuth) -> Response {
    let response = CallerResponse {
        id: caller.id.to_string(),
        role: caller.role,
    };
    (StatusCode::OK, Json(response)).into_response()
}
