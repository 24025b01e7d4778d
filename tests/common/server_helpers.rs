//! Test server helpers
//!
//! Builds the full router without a database or image store, which is how
//! the server runs when those services are not configured.

use axum_test::TestServer;
use hth_server::backend::auth::create_token;
use hth_server::backend::realtime::RealtimeRelay;
use hth_server::backend::routes::create_router;
use hth_server::backend::server::AppState;
use hth_server::shared::AppConfig;
use std::time::Duration;
use uuid::Uuid;

/// Configuration used by every test server
pub fn test_config() -> AppConfig {
    AppConfig::default()
}

/// Router over `AppState` with no database pool and no media store
pub fn create_test_server() -> TestServer {
    let state = AppState::new(test_config(), None, None);
    TestServer::new(create_router(state)).expect("Failed to create test server")
}

/// Router served on a real port so sockets can be opened against it
///
/// Also returns the relay behind the router, for checking server-side
/// state once frames have gone over the wire.
pub fn create_socket_server() -> (TestServer, RealtimeRelay) {
    let state = AppState::new(test_config(), None, None);
    let relay = state.relay.clone();
    let server = TestServer::builder()
        .http_transport()
        .build(create_router(state))
        .expect("Failed to create socket test server");
    (server, relay)
}

/// Poll `condition` until it holds, panicking after a few seconds
///
/// Socket frames are handled on server tasks, so relay state catches up
/// with the client asynchronously.
pub async fn wait_until<F>(what: &str, mut condition: F)
where
    F: FnMut() -> bool,
{
    for _ in 0..500 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("Timed out waiting for {}", what);
}

/// A valid session token signed with the test secret
pub fn test_token(is_admin: bool) -> String {
    create_token(&test_config().jwt_secret, Uuid::new_v4(), is_admin)
        .expect("Failed to sign test token")
}
