//! Bearer-token middleware and extractors.
//!
//! The middleware resolves `Authorization: Bearer <token>` through the
//! `AuthProvider` port and injects the resulting [`Caller`] into the
//! request extensions. Handlers opt in with the [`RequireAuth`]
//! extractor; routes without it stay public.
//!
//! A missing header passes through untouched (the extractor rejects
//! later if the handler requires auth); a present-but-invalid token is
//! rejected immediately with 401.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::domain::foundation::{AuthError, Caller};
use crate::ports::AuthProvider;

/// Middleware state - the auth provider port.
pub type AuthState = Arc<dyn AuthProvider>;

/// Validates bearer tokens and injects the caller.
pub async fn auth_middleware(
    State(auth): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(token) => match auth.current_caller(token).await {
            Ok(caller) => {
                request.extensions_mut().insert(caller);
                next.run(request).await
            }
            Err(e) => {
                let message = match &e {
                    AuthError::TokenExpired => "Token expired",
                    _ => "Invalid token",
                };
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorResponse::new("UNAUTHENTICATED", message)),
                )
                    .into_response()
            }
        },
        None => next.run(request).await,
    }
}

/// Extractor that requires an authenticated caller.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub Caller);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<Caller>()
                .cloned()
                .map(RequireAuth)
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Rejection returned when no valid token accompanied the request.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new(
                "UNAUTHENTICATED",
                "Authentication required",
            )),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{UserId, UserRole};
    use axum::extract::FromRequestParts;
    use axum::http::Request;

    fn test_caller() -> Caller {
        Caller::new(UserId::new(), UserRole::Adopter)
    }

    #[tokio::test]
    async fn require_auth_extracts_caller_from_extensions() {
        let mut request: Request<()> = Request::builder().uri("/test").body(()).unwrap();
        request.extensions_mut().insert(test_caller());
        let (mut parts, _) = request.into_parts();

        let RequireAuth(caller) = RequireAuth::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(caller.role, UserRole::Adopter);
    }

    #[tokio::test]
    async fn require_auth_rejects_without_caller() {
        let request: Request<()> = Request::builder().uri("/test").body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        let result = RequireAuth::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthRejection::Unauthenticated)));
    }

    #[test]
    fn auth_rejection_is_401() {
        let response = AuthRejection::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn bearer_prefix_extraction() {
        assert_eq!("Bearer tok".strip_prefix("Bearer "), Some("tok"));
        assert_eq!("tok".strip_prefix("Bearer "), None);
        assert_eq!("Basic dXNlcg==".strip_prefix("Bearer "), None);
    }
}
