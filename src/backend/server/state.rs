/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds:
 * - The realtime relay (presence, rooms, namespace hubs)
 * - The optional database pool
 * - The loaded configuration
 * - The optional media store
 *
 * Every field is cheap to clone; handlers extract only the part they need.
 *
 * # Example
 *
 * ```rust
 * use hth_server::backend::realtime::RealtimeRelay;
 * use axum::extract::State;
 *
 * async fn handler(State(relay): State<RealtimeRelay>) -> String {
 *     relay.connection_count(hth_server::shared::Namespace::Chat).to_string()
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::PgPool;
use std::sync::Arc;
use crate::backend::media::MediaStore;
use crate::backend::realtime::RealtimeRelay;
use crate::shared::AppConfig;

/// Optional media store handle
pub type SharedMediaStore = Option<Arc<dyn MediaStore>>;

/// Central state container for the Axum application
#[derive(Clone)]
pub struct AppState {
    /// Realtime relay shared by every socket
    pub relay: RealtimeRelay,

    /// Database connection pool
    ///
    /// This is `None` if the database is not configured (e.g., if
    /// `DATABASE_URL` is not set). Handlers answer 503 in that case.
    pub db_pool: Option<PgPool>,

    pub config: Arc<AppConfig>,

    /// Image store; uploads are skipped when `None`
    pub media: SharedMediaStore,
}

impl AppState {
    pub fn new(config: AppConfig, db_pool: Option<PgPool>, media: SharedMediaStore) -> Self {
        Self {
            relay: RealtimeRelay::new(),
            db_pool,
            config: Arc::new(config),
            media,
        }
    }
}

impl FromRef<AppState> for RealtimeRelay {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.relay.clone()
    }
}

impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

impl FromRef<AppState> for SharedMediaStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.media.clone()
    }
}
