/**
 * Current User Handlers
 *
 * GET /api/auth/me and PUT /api/auth/me. Both sit behind the auth
 * middleware and act on the user named by the token.
 *
 * Profile updates are multipart: text fields `name`, `city`, `gender`,
 * `birthday` plus optional `profileImage` / `bannerImage` files. Absent
 * or blank fields keep their stored value.
 */

use axum::{
    extract::{Multipart, State},
    response::Json,
};
use sqlx::PgPool;

use crate::backend::auth::handlers::form::{parse_birthday, store_image, FormData};
use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::{get_user_by_id, update_profile, ProfileUpdate};
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::media::{BANNER_FOLDER, PROFILE_FOLDER};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::SharedMediaStore;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - No valid token (rejected by middleware)
/// * `404 Not Found` - The token's user no longer exists
/// * `503 Service Unavailable` - Database not configured
pub async fn get_me(
    AuthUser(auth): AuthUser,
    State(pool): State<Option<PgPool>>,
) -> BackendResult<Json<UserResponse>> {
    let pool = pool.ok_or_else(BackendError::database_unavailable)?;

    let user = get_user_by_id(&pool, auth.user_id)
        .await
        .map_err(|e| {
            tracing::error!("[Auth] Failed to load user {}: {:?}", auth.user_id, e);
            BackendError::from(e)
        })?
        .ok_or_else(|| BackendError::not_found("User not found"))?;

    Ok(Json(UserResponse::from(user)))
}

/// Read the text part of a profile update
pub fn profile_update_from_form(form: &FormData) -> BackendResult<ProfileUpdate> {
    let birthday = match form.text("birthday") {
        Some(value) => Some(parse_birthday(value).ok_or_else(|| BackendError::bad_request("Invalid birthday"))?),
        None => None,
    };
    Ok(ProfileUpdate {
        name: form.text("name").map(str::to_string),
        city: form.text("city").map(str::to_string),
        gender: form.text("gender").map(str::to_string),
        birthday,
        profile_image: None,
        banner_image: None,
    })
}

/// Update current user handler
pub async fn update_me(
    AuthUser(auth): AuthUser,
    State(pool): State<Option<PgPool>>,
    State(media): State<SharedMediaStore>,
    multipart: Multipart,
) -> BackendResult<Json<UserResponse>> {
    let pool = pool.ok_or_else(BackendError::database_unavailable)?;

    let mut form = FormData::read(multipart).await?;
    let mut update = profile_update_from_form(&form)?;
    update.profile_image = store_image(&media, PROFILE_FOLDER, form.take_file("profileImage")).await?;
    update.banner_image = store_image(&media, BANNER_FOLDER, form.take_file("bannerImage")).await?;

    let user = update_profile(&pool, auth.user_id, update)
        .await
        .map_err(|e| {
            tracing::error!("[Auth] Profile update failed for {}: {:?}", auth.user_id, e);
            BackendError::from(e)
        })?
        .ok_or_else(|| BackendError::not_found("User not found"))?;

    tracing::info!("[Auth] Profile updated: {}", user.id);
    Ok(Json(UserResponse::from(user)))
}
