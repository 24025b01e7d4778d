/**
 * Password Reset Handlers
 *
 * POST /api/auth/forgot-password and POST /api/auth/reset-password.
 *
 * A forgot-password request stores a six-digit code on the user, valid for
 * ten minutes. The code is not delivered anywhere yet; reset-password
 * accepts it together with the email and the new password.
 */

use axum::{extract::State, response::Json};
use bcrypt::hash;
use chrono::{Duration, Utc};
use sqlx::PgPool;

use crate::backend::auth::handlers::register::PASSWORD_HASH_COST;
use crate::backend::auth::handlers::types::{ForgotPasswordRequest, MessageResponse, ResetPasswordRequest};
use crate::backend::auth::users::{get_user_by_email, reset_password_with_code, set_reset_code};
use crate::backend::error::{BackendError, BackendResult};

/// Minutes a reset code stays valid
pub const RESET_CODE_TTL_MINUTES: i64 = 10;

/// Six-digit numeric code in `100000..=999999`
pub fn generate_reset_code() -> String {
    let n = uuid::Uuid::new_v4().as_u128() % 900_000 + 100_000;
    n.to_string()
}

/// Forgot password handler
///
/// # Errors
///
/// * `404 Not Found` - No user with this email
/// * `503 Service Unavailable` - Database not configured
pub async fn forgot_password(
    State(pool): State<Option<PgPool>>,
    Json(request): Json<ForgotPasswordRequest>,
) -> BackendResult<Json<MessageResponse>> {
    let pool = pool.ok_or_else(BackendError::database_unavailable)?;

    let user = get_user_by_email(&pool, &request.email)
        .await?
        .ok_or_else(|| BackendError::not_found("User not found"))?;

    let code = generate_reset_code();
    let expires = Utc::now() + Duration::minutes(RESET_CODE_TTL_MINUTES);
    set_reset_code(&pool, user.id, &code, expires).await.map_err(|e| {
        tracing::error!("[Auth] Failed to store reset code for {}: {:?}", user.id, e);
        BackendError::from(e)
    })?;

    tracing::info!("[Auth] Reset code issued for {} (expires {})", user.id, expires);

    Ok(Json(MessageResponse::new("Reset code created")))
}

/// Reset password handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing field, wrong code, or expired code
/// * `503 Service Unavailable` - Database not configured
pub async fn reset_password(
    State(pool): State<Option<PgPool>>,
    Json(request): Json<ResetPasswordRequest>,
) -> BackendResult<Json<MessageResponse>> {
    let pool = pool.ok_or_else(BackendError::database_unavailable)?;

    if request.email.is_empty() || request.code.is_empty() || request.new_password.is_empty() {
        return Err(BackendError::bad_request("All fields are required"));
    }

    let password_hash = hash(&request.new_password, PASSWORD_HASH_COST)?;
    let updated = reset_password_with_code(&pool, &request.email, &request.code, &password_hash, Utc::now()).await?;

    if !updated {
        tracing::warn!("[Auth] Invalid or expired reset code for {}", request.email);
        return Err(BackendError::bad_request("Invalid or expired code"));
    }

    tracing::info!("[Auth] Password reset for {}", request.email);
    Ok(Json(MessageResponse::new("Password updated")))
}
