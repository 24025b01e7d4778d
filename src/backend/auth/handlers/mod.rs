//! Authentication Handlers Module
//!
//! HTTP handlers for the `/api/auth` endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── form.rs      - Multipart form buffering and image upload
//! ├── register.rs  - User registration handler
//! ├── login.rs     - User authentication handler
//! ├── me.rs        - Current user fetch/update handlers
//! └── password.rs  - Forgot/reset password handlers
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register
//! - **`login`** - POST /api/auth/login
//! - **`get_me`** - GET /api/auth/me
//! - **`update_me`** - PUT /api/auth/me
//! - **`forgot_password`** - POST /api/auth/forgot-password
//! - **`reset_password`** - POST /api/auth/reset-password
//!
//! Every handler answers 503 when the server runs without a database.

/// Request and response types
pub mod types;

/// Multipart form helpers
pub mod form;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Current user handlers
pub mod me;

/// Password reset handlers
pub mod password;

pub use types::{AuthResponse, ForgotPasswordRequest, LoginRequest, MessageResponse, ResetPasswordRequest, UserResponse};

pub use register::register;
pub use login::login;
pub use me::{get_me, update_me};
pub use password::{forgot_password, reset_password};
