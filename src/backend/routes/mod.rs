//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs              - Module exports and documentation
//! ├── router.rs           - Main router creation, CORS, tracing
//! ├── realtime_routes.rs  - WebSocket namespace endpoints
//! └── api_routes.rs       - Auth API endpoints
//! ```
//!
//! # Route Types
//!
//! ## Realtime Routes
//!
//! - `GET /socket` - Default chat namespace
//! - `GET /socket/support` - Support namespace
//! - `GET /socket/comments` - Comments namespace
//!
//! ## API Routes
//!
//! - `POST /api/auth/register`, `POST /api/auth/login`
//! - `GET|PUT /api/auth/me`
//! - `POST /api/auth/forgot-password`, `POST /api/auth/reset-password`
//!
//! ## Static Files
//!
//! - `/uploads/*` - Files from the local `uploads/` directory

/// Main router creation
pub mod router;

/// WebSocket routes
pub mod realtime_routes;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
