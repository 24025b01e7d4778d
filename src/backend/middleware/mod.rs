//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Bearer token verification for protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use hth_server::backend::auth::get_me;
//! use hth_server::backend::middleware::auth_middleware;
//! use hth_server::backend::server::AppState;
//! use hth_server::shared::AppConfig;
//!
//! let state = AppState::new(AppConfig::default(), None, None);
//! let protected: Router<AppState> = Router::new()
//!     .route("/me", get(get_me))
//!     .route_layer(middleware::from_fn_with_state(state, auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser};
