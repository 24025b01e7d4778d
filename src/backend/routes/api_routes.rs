/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/register` - User registration (multipart)
 * - `POST /api/auth/login` - User login
 * - `GET /api/auth/me` - Current user (requires authentication)
 * - `PUT /api/auth/me` - Profile update (requires authentication, multipart)
 * - `POST /api/auth/forgot-password` - Issue a reset code
 * - `POST /api/auth/reset-password` - Consume a reset code
 */

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use crate::backend::auth::{forgot_password, get_me, login, register, reset_password, update_me};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Body limit for routes that accept image uploads
fn upload_limit(app_state: &AppState) -> DefaultBodyLimit {
    DefaultBodyLimit::max(app_state.config.upload_limit_bytes)
}

/// Configure API routes
///
/// `/api/auth/me` is wrapped in the auth middleware; every other auth
/// route is public.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let require_auth = middleware::from_fn_with_state(app_state.clone(), auth_middleware);

    router
        .route(
            "/api/auth/register",
            post(register).layer(upload_limit(app_state)),
        )
        .route("/api/auth/login", post(login))
        .route(
            "/api/auth/me",
            get(get_me)
                .put(update_me)
                .layer(upload_limit(app_state))
                .route_layer(require_auth),
        )
        .route("/api/auth/forgot-password", post(forgot_password))
        .route("/api/auth/reset-password", post(reset_password))
}
