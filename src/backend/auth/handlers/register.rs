/**
 * Register Handler
 *
 * POST /api/auth/register (multipart/form-data)
 *
 * # Registration Process
 *
 * 1. Require name, email, password, gender, birthday and city
 * 2. Reject an email that is already registered
 * 3. Hash the password with bcrypt (cost 10)
 * 4. Upload the optional `profileImage` to `hth/profile`
 * 5. Create the user and return a token
 */

use std::sync::Arc;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Json,
};
use bcrypt::hash;
use sqlx::PgPool;

use crate::backend::auth::handlers::form::{parse_birthday, store_image, FormData};
use crate::backend::auth::handlers::types::{AuthResponse, UserResponse};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::{create_user, get_user_by_email, is_unique_violation, NewUser};
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::media::PROFILE_FOLDER;
use crate::backend::server::state::SharedMediaStore;
use crate::shared::AppConfig;

/// bcrypt work factor for stored passwords
pub const PASSWORD_HASH_COST: u32 = 10;

const DUPLICATE_EMAIL: &str = "A user with this email already exists";

/// Text fields of a registration form
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterFields {
    pub name: String,
    pub email: String,
    pub password: String,
    pub gender: String,
    pub birthday: String,
    pub city: String,
}

impl RegisterFields {
    /// Every field is required; blank counts as missing
    pub fn from_form(form: &FormData) -> BackendResult<Self> {
        let field = |name: &str| {
            form.text(name)
                .map(str::to_string)
                .ok_or_else(|| BackendError::bad_request("All fields are required"))
        };
        Ok(Self {
            name: field("name")?,
            email: field("email")?,
            password: field("password")?,
            gender: field("gender")?,
            birthday: field("birthday")?,
            city: field("city")?,
        })
    }
}

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing field, bad birthday, or duplicate email
/// * `503 Service Unavailable` - Database not configured
/// * `502 Bad Gateway` - Image upload failed
/// * `500 Internal Server Error` - Hashing, insert or token failure
pub async fn register(
    State(pool): State<Option<PgPool>>,
    State(config): State<Arc<AppConfig>>,
    State(media): State<SharedMediaStore>,
    multipart: Multipart,
) -> BackendResult<(StatusCode, Json<AuthResponse>)> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("[Auth] Database not configured");
        BackendError::database_unavailable()
    })?;

    let mut form = FormData::read(multipart).await?;
    let fields = RegisterFields::from_form(&form)?;
    tracing::info!("[Auth] Register request for {}", fields.email);

    let birthday = parse_birthday(&fields.birthday)
        .ok_or_else(|| BackendError::bad_request("Invalid birthday"))?;

    if get_user_by_email(&pool, &fields.email).await?.is_some() {
        tracing::warn!("[Auth] Email already exists: {}", fields.email);
        return Err(BackendError::bad_request(DUPLICATE_EMAIL));
    }

    let password_hash = hash(&fields.password, PASSWORD_HASH_COST).map_err(|e| {
        tracing::error!("[Auth] Failed to hash password: {:?}", e);
        BackendError::from(e)
    })?;

    let profile_image = store_image(&media, PROFILE_FOLDER, form.take_file("profileImage"))
        .await?
        .unwrap_or_default();

    let new_user = NewUser {
        name: fields.name,
        email: fields.email,
        password_hash,
        gender: fields.gender,
        birthday,
        city: fields.city,
        profile_image,
    };

    let user = match create_user(&pool, new_user).await {
        Ok(user) => user,
        // Lost a race with a concurrent registration
        Err(e) if is_unique_violation(&e) => return Err(BackendError::bad_request(DUPLICATE_EMAIL)),
        Err(e) => {
            tracing::error!("[Auth] Failed to create user: {:?}", e);
            return Err(e.into());
        }
    };

    let token = create_token(&config.jwt_secret, user.id, user.is_admin).map_err(|e| {
        tracing::error!("[Auth] Failed to create token: {:?}", e);
        BackendError::from(e)
    })?;

    tracing::info!("[Auth] User created: {} ({})", user.id, user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: UserResponse::from(user),
        }),
    ))
}
