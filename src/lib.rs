//! HTH Server - Main Library
//!
//! Backend for the HTH marketplace: user accounts over a JSON API and a
//! real-time relay that carries chat messages, typing indicators, comment
//! updates and support messages between connected clients.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared by the relay and the HTTP layer
//!   - Event frames and namespaces
//!   - Configuration
//!   - Error types
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server and WebSocket endpoints
//!   - Presence registry, room manager and namespace relay
//!   - Authentication, PostgreSQL persistence, image uploads
//!
//! # Usage
//!
//! ```rust,no_run
//! use hth_server::backend::server::init::create_app;
//! use hth_server::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5555").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Realtime Namespaces
//!
//! | Path               | Inbound events                                              |
//! |--------------------|-------------------------------------------------------------|
//! | `/socket`          | `joinRoom`, `deleteMessage`, `typing`, `stopTyping`, `sendMessage` |
//! | `/socket/support`  | `registerSupportUser`, `newMessage`                         |
//! | `/socket/comments` | `newComment`, `deleteComment`                               |
//!
//! Frames are JSON text messages: `{"event": "<name>", "data": <any>}`.
//!
//! # Error Handling
//!
//! - `shared::SharedError` for malformed relay frames
//! - `backend::BackendError` for HTTP handlers (JSON `{"error": ...}` bodies)
//! - `shared::ConfigError` for configuration loading

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
