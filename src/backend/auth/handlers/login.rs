/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Generate JWT token
 * 4. Return token and user info
 *
 * Unknown email and wrong password are both 400, with distinct messages.
 */
use std::sync::Arc;
use axum::{
    extract::State,
    response::Json,
};
use bcrypt::verify;
use sqlx::PgPool;

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::{BackendError, BackendResult};
use crate::shared::AppConfig;

/// Login handler
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "securepassword123"
/// }
/// ```
pub async fn login(
    State(pool): State<Option<PgPool>>,
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<LoginRequest>,
) -> BackendResult<Json<AuthResponse>> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("[Auth] Database not configured");
        BackendError::database_unavailable()
    })?;
    tracing::info!("[Auth] Login request for: {}", request.email);

    let user = get_user_by_email(&pool, &request.email)
        .await
        .map_err(|e| {
            tracing::error!("[Auth] Database error: {:?}", e);
            BackendError::from(e)
        })?
        .ok_or_else(|| {
            tracing::warn!("[Auth] User not found: {}", request.email);
            BackendError::bad_request("User not found")
        })?;

    let valid = verify(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("[Auth] Password verification error: {:?}", e);
        BackendError::from(e)
    })?;

    if !valid {
        tracing::warn!("[Auth] Invalid password for user: {}", request.email);
        return Err(BackendError::bad_request("Incorrect password"));
    }

    let token = create_token(&config.jwt_secret, user.id, user.is_admin).map_err(|e| {
        tracing::error!("[Auth] Failed to create token: {:?}", e);
        BackendError::from(e)
    })?;

    tracing::info!("[Auth] User logged in: {} ({})", user.id, user.email);

    Ok(Json(AuthResponse {
        token,
        user: UserResponse::from(user),
    }))
}
