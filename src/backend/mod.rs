//! Backend Module
//!
//! All server-side code: the Axum HTTP server, the realtime relay behind
//! its WebSocket endpoints, and the auth API.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, service loading
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`realtime`** - Presence registry, rooms and the three-namespace relay
//! - **`auth`** - Registration, login, profile and password reset
//! - **`media`** - Image upload to the binary object store
//! - **`middleware`** - Bearer token verification
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── realtime/       - Event relay
//! ├── auth/           - Authentication
//! ├── media/          - Object store
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the relay, the optional database pool, the
//! configuration and the optional media store. The relay keeps every bit of
//! realtime state behind one mutex, so socket events are handled strictly
//! one at a time. Nothing realtime is persisted.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Real-time relay
pub mod realtime;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Binary object store
pub mod media;

/// Middleware for request processing
pub mod middleware;

pub use server::create_app;
pub use realtime::RealtimeRelay;
pub use error::BackendError;
