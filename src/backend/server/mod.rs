//! Server Module
//!
//! This module contains all server-side code for initializing and configuring
//! the Axum HTTP server.
//!
//! # Architecture
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Service loading (database pool, media store)
//! - **`init`** - Server initialization and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Service loading
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use hth_server::backend::server::create_app;
//! use hth_server::shared::AppConfig;
//!
//! # async fn example() {
//! let app = create_app(AppConfig::default()).await;
//! # }
//! ```

/// Application state management
pub mod state;

/// Service loading
pub mod config;

/// Server initialization
pub mod init;

pub use state::{AppState, SharedMediaStore};
pub use init::create_app;
