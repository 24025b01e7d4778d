/**
 * Service Loading
 *
 * Turns the typed `AppConfig` into live services: the optional
 * PostgreSQL pool and the optional media store.
 *
 * # Error Handling
 *
 * Failures are logged but do not prevent server startup. Services that
 * fail to initialize are set to `None` and the server continues without
 * them; the realtime relay never depends on either.
 */

use sqlx::PgPool;
use std::sync::Arc;
use crate::backend::media::{CloudinaryStore, MediaStore};
use crate::backend::server::state::SharedMediaStore;
use crate::shared::AppConfig;

/// Database configuration result
pub type DatabaseConfig = Option<PgPool>;

/// Connect to PostgreSQL and run migrations
///
/// Returns `None` if `database_url` is not configured or the connection
/// fails. Migration failures are logged and the pool is still returned.
pub async fn load_database(config: &AppConfig) -> DatabaseConfig {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Database features will be disabled.");
        return None;
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}

/// Build the media store from configuration
pub fn load_media_store(config: &AppConfig) -> SharedMediaStore {
    match &config.cloudinary {
        Some(cloudinary) => {
            tracing::info!("[Media] Using Cloudinary cloud {}", cloudinary.cloud_name);
            let store: Arc<dyn MediaStore> = Arc::new(CloudinaryStore::new(cloudinary.clone()));
            Some(store)
        }
        None => {
            tracing::warn!("[Media] Cloudinary not configured. Image uploads will be ignored.");
            None
        }
    }
}
