/**
 * Backend Error Types
 *
 * Errors raised by HTTP handlers and the services behind them. Every
 * variant maps to a status code and converts into a JSON response.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Request-level failures with an explicit status: missing form fields,
 * duplicate emails, bad credentials, missing tokens.
 *
 * ## Infrastructure Errors
 *
 * Database, hashing, token and media-store failures. These are logged at
 * the call site; the client only sees a generic message.
 */

use thiserror::Error;
use axum::http::StatusCode;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use hth_server::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "All fields are required");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., missing field, bad credentials)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// Token creation or verification failure
    #[error("Token error: {0}")]
    AuthError(#[from] jsonwebtoken::errors::Error),

    #[error("Password hashing error: {0}")]
    HashError(#[from] bcrypt::BcryptError),

    /// Binary object store failure
    #[error("Media error: {message}")]
    MediaError {
        message: String,
    },
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_FOUND, message)
    }

    /// Database pool missing: the server was started without `DATABASE_URL`
    pub fn database_unavailable() -> Self {
        Self::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not available")
    }

    pub fn media(message: impl Into<String>) -> Self {
        Self::MediaError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `AuthError` - 401 Unauthorized
    /// - `MediaError` - 502 Bad Gateway
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::AuthError(_) => StatusCode::UNAUTHORIZED,
            Self::HashError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MediaError { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message shown to the client
    ///
    /// Infrastructure errors never leak their details.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::DatabaseError(_) | Self::HashError(_) => "Server error".to_string(),
            Self::AuthError(_) => "Invalid token".to_string(),
            Self::MediaError { message } => format!("Upload failed: {}", message),
        }
    }
}
