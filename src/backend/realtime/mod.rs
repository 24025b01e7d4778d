//! Real-time Relay Module
//!
//! Presence tracking, room membership and event fan-out for the three
//! socket namespaces (default chat, `/support`, `/comments`).
//!
//! # Architecture
//!
//! - **`connection`** - Connection ids and per-connection outbound queues
//! - **`presence`** - Support user id -> connection registry
//! - **`rooms`** - Room membership for one namespace
//! - **`broadcast`** - Fire-and-forget delivery onto outbound queues
//! - **`hub`** - Connections + rooms of one namespace
//! - **`handlers`** - Per-namespace event handling
//! - **`relay`** - `RealtimeRelay`, the shared state all sockets go through
//! - **`socket`** - axum WebSocket routes
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs
//! ├── connection.rs
//! ├── presence.rs
//! ├── rooms.rs
//! ├── broadcast.rs
//! ├── hub.rs
//! ├── relay.rs
//! ├── socket.rs
//! └── handlers/
//! ```
//!
//! # Example
//!
//! ```rust
//! use hth_server::backend::realtime::RealtimeRelay;
//! use hth_server::shared::{Namespace, RelayEvent};
//! use serde_json::json;
//!
//! let relay = RealtimeRelay::new();
//! let a = relay.connect(Namespace::Comments);
//! let mut b = relay.connect(Namespace::Comments);
//!
//! relay.handle(Namespace::Comments, a.id, RelayEvent::new("newComment", json!({"text": "hi"})));
//! assert_eq!(b.receiver.try_recv().unwrap().event, "newComment");
//! ```

/// Connection identifiers and outbound queues
pub mod connection;

/// Support presence registry
pub mod presence;

/// Room membership
pub mod rooms;

/// Event delivery helpers
pub mod broadcast;

/// Per-namespace connection hub
pub mod hub;

/// Namespace event handlers
pub mod handlers;

/// Shared relay state
pub mod relay;

/// WebSocket transport
pub mod socket;

pub use broadcast::{broadcast_event, send_event};
pub use connection::{ConnectionId, EventReceiver, EventSender, RelayConnection};
pub use hub::NamespaceHub;
pub use presence::{PresenceEntry, PresenceRegistry};
pub use relay::RealtimeRelay;
pub use rooms::RoomManager;
pub use socket::{chat_socket, comments_socket, serve_socket, support_socket};
