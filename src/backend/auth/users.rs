/**
 * User Model and Database Operations
 *
 * This module handles user records and their database operations. All
 * queries are plain `sqlx::query_as` against the `users` table created by
 * the embedded migration.
 */

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Column list shared by every query returning a full user
const USER_COLUMNS: &str = "id, name, email, password_hash, gender, birthday, city, \
    profile_image, banner_image, is_admin, reset_code, reset_code_expires, created_at, updated_at";

/// User struct representing a row of the `users` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: uuid::Uuid,
    pub name: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    pub gender: String,
    pub birthday: NaiveDate,
    pub city: String,
    /// Profile image URL, empty when none was uploaded
    pub profile_image: String,
    /// Banner image URL, empty when none was uploaded
    pub banner_image: String,
    pub is_admin: bool,
    /// Pending password reset code
    pub reset_code: Option<String>,
    pub reset_code_expires: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub gender: String,
    pub birthday: NaiveDate,
    pub city: String,
    pub profile_image: String,
}

/// Partial profile update; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub city: Option<String>,
    pub gender: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub profile_image: Option<String>,
    pub banner_image: Option<String>,
}

/// Create a new user
pub async fn create_user(pool: &PgPool, new_user: NewUser) -> Result<User, sqlx::Error> {
    let id = uuid::Uuid::new_v4();
    let now = Utc::now();

    let query = format!(
        r#"
        INSERT INTO users (id, name, email, password_hash, gender, birthday, city, profile_image, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
        RETURNING {USER_COLUMNS}
        "#
    );

    let user = sqlx::query_as::<_, User>(&query)
        .bind(id)
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(&new_user.gender)
        .bind(new_user.birthday)
        .bind(&new_user.city)
        .bind(&new_user.profile_image)
        .bind(now)
        .fetch_one(pool)
        .await?;

    Ok(user)
}

/// Get user by email
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
    sqlx::query_as::<_, User>(&query)
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Get user by ID
pub async fn get_user_by_id(pool: &PgPool, id: uuid::Uuid) -> Result<Option<User>, sqlx::Error> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
    sqlx::query_as::<_, User>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Apply a partial profile update
///
/// Returns the updated user, or `None` if the user no longer exists.
pub async fn update_profile(
    pool: &PgPool,
    id: uuid::Uuid,
    update: ProfileUpdate,
) -> Result<Option<User>, sqlx::Error> {
    let query = format!(
        r#"
        UPDATE users SET
            name = COALESCE($2, name),
            city = COALESCE($3, city),
            gender = COALESCE($4, gender),
            birthday = COALESCE($5, birthday),
            profile_image = COALESCE($6, profile_image),
            banner_image = COALESCE($7, banner_image),
            updated_at = $8
        WHERE id = $1
        RETURNING {USER_COLUMNS}
        "#
    );

    sqlx::query_as::<_, User>(&query)
        .bind(id)
        .bind(update.name)
        .bind(update.city)
        .bind(update.gender)
        .bind(update.birthday)
        .bind(update.profile_image)
        .bind(update.banner_image)
        .bind(Utc::now())
        .fetch_optional(pool)
        .await
}

/// Store a password reset code, replacing any pending one
pub async fn set_reset_code(
    pool: &PgPool,
    id: uuid::Uuid,
    code: &str,
    expires: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE users SET reset_code = $2, reset_code_expires = $3, updated_at = NOW()
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(code)
    .bind(expires)
    .execute(pool)
    .await?;

    Ok(())
}

/// Replace the password of the user holding `code`, if still valid
///
/// The code is cleared in the same statement. Returns `false` when no user
/// matches the email/code pair or the code has expired.
pub async fn reset_password_with_code(
    pool: &PgPool,
    email: &str,
    code: &str,
    password_hash: &str,
    now: DateTime<Utc>,
) -> Result<bool, sqlx::Error> {
    let updated = sqlx::query(
        r#"
        UPDATE users SET
            password_hash = $3,
            reset_code = NULL,
            reset_code_expires = NULL,
            updated_at = $4
        WHERE email = $1 AND reset_code = $2 AND reset_code_expires >= $4
        "#,
    )
    .bind(email)
    .bind(code)
    .bind(password_hash)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(updated.rows_affected() > 0)
}

/// Whether a database error is a unique-constraint violation
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}
