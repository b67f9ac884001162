//! Bearer-token extraction. Resolving the caller's identity is the only
//! authentication work this layer does; token issuing lives behind the
//! `AuthTokenManager` capability.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};
use forum_core::error::AppError;

use crate::error::ApiError;
use crate::handlers::AppState;

/// The verified identity of the caller, extracted from the
/// `Authorization: Bearer <token>` header.
pub struct AuthenticatedUser {
    pub id: String,
    pub username: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_user(req))
    }
}

fn extract_user(req: &HttpRequest) -> Result<AuthenticatedUser, ApiError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| ApiError(AppError::Internal("app state not configured".to_string())))?;

    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| ApiError(AppError::Unauthenticated("Missing authentication".to_string())))?;

    // A bad token reads the same as no token to the caller.
    let payload = state
        .token_manager
        .verify_access_token(token)
        .map_err(|_| ApiError(AppError::Unauthenticated("Missing authentication".to_string())))?;
    Ok(AuthenticatedUser { id: payload.id, username: payload.username })
}
