/**
 * HTH Server Entry Point
 *
 * Loads configuration, initializes tracing and serves the Axum app
 * (auth API + realtime sockets).
 */

use hth_server::backend::server::init::create_app;
use hth_server::shared::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("[STARTUP] Tracing initialized with RUST_LOG={}", env_filter);

    let config = AppConfig::from_env()?;
    let port = config.port;

    let app = create_app(config).await;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("[STARTUP] Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
