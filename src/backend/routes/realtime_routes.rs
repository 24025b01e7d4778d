/**
 * Realtime Routes
 *
 * One WebSocket endpoint per relay namespace:
 *
 * - `GET /socket` - default chat namespace
 * - `GET /socket/support` - support namespace
 * - `GET /socket/comments` - comments namespace
 */

use axum::{routing::get, Router};
use crate::backend::realtime::{chat_socket, comments_socket, support_socket};
use crate::backend::server::state::AppState;

/// Path prefix shared by every socket route
pub const SOCKET_PATH: &str = "/socket";

pub fn configure_realtime_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(SOCKET_PATH, get(chat_socket))
        .route("/socket/support", get(support_socket))
        .route("/socket/comments", get(comments_socket))
}
