/**
 * Server Initialization
 *
 * Builds the application state and the router.
 *
 * # Initialization Process
 *
 * 1. Load optional services (database, media store)
 * 2. Create the realtime relay (empty: presence and rooms never survive a restart)
 * 3. Create and configure the router
 */

use axum::Router;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, load_media_store};
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Error Handling
///
/// - Missing database: server continues without auth features (503)
/// - Missing media store: image parts are ignored
pub async fn create_app(config: AppConfig) -> Router<()> {
    tracing::info!("Initializing HTH backend server");

    let db_pool = load_database(&config).await;
    let media = load_media_store(&config);

    let app_state = AppState::new(config, db_pool, media);
    tracing::info!("Realtime relay initialized");

    create_router(app_state)
}
