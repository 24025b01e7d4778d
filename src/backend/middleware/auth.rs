/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies JWT tokens from the
 * Authorization header and provides the user ID to handlers.
 */

use std::sync::Arc;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;
use crate::backend::auth::sessions::verify_token;
use crate::backend::error::BackendError;
use crate::shared::AppConfig;

/// Authenticated user data extracted from JWT token
#[derive(Clone, Debug, PartialEq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub is_admin: bool,
}

/// Token from an `Authorization: Bearer <token>` header value
pub fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Authentication middleware
///
/// 1. Extracts JWT token from Authorization header
/// 2. Verifies the token
/// 3. Attaches user data to request extensions for use in handlers
///
/// Returns 401 Unauthorized if token is missing or invalid
pub async fn auth_middleware(
    State(config): State<Arc<AppConfig>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(bearer_token)
        .ok_or_else(|| {
            tracing::warn!("[Auth] Missing or malformed Authorization header");
            BackendError::unauthorized("No token provided")
        })?;

    let claims = verify_token(&config.jwt_secret, token).map_err(|e| {
        tracing::warn!("[Auth] Invalid token: {:?}", e);
        BackendError::unauthorized("Invalid token")
    })?;

    let user_id = claims.user_id().map_err(|e| {
        tracing::warn!("[Auth] Invalid user ID in token: {:?}", e);
        BackendError::unauthorized("Invalid token")
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        is_admin: claims.is_admin,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for authenticated user
///
/// Reads the `AuthenticatedUser` placed in the request extensions by
/// `auth_middleware`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("[Auth] AuthenticatedUser not found in request extensions");
                BackendError::unauthorized("No token provided")
            })?;

        Ok(AuthUser(user))
    }
}
