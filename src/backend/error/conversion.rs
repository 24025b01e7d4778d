/**
 * Error Conversion
 *
 * Backend errors implement `IntoResponse`, so handlers return
 * `Result<_, BackendError>` directly. The body is always:
 *
 * ```json
 * { "error": "Error message" }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("[Backend] {}", self);
        }
        let body = serde_json::json!({ "error": self.message() });
        (status, Json(body)).into_response()
    }
}
