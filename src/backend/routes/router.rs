/**
 * Router Configuration
 *
 * Combines all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Realtime routes (WebSocket namespaces)
 * 2. API routes (auth)
 * 3. Static uploads
 * 4. Fallback handler (404)
 *
 * The whole router is wrapped in request tracing and CORS.
 */

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::realtime_routes::configure_realtime_routes;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Directory served under `/uploads`
pub const UPLOADS_DIR: &str = "uploads";

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    let router = configure_realtime_routes(router);
    let router = configure_api_routes(router, &app_state);

    let router = router.nest_service("/uploads", ServeDir::new(UPLOADS_DIR));

    let router = router.fallback(not_found);

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&app_state.config))
        .with_state(app_state)
}

async fn not_found() -> BackendError {
    BackendError::not_found("Route not found")
}

/// CORS policy for the configured frontend origins
///
/// Requests without an `Origin` header (server-to-server, health checks)
/// are unaffected.
pub fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin {}: {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
