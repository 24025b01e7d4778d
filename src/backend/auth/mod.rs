//! Authentication Module
//!
//! This module handles user registration, login, profile management and
//! password resets.
//!
//! # Architecture
//!
//! - **`users`** - User data model and database operations
//! - **`sessions`** - JWT token generation and validation
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: multipart form → user created → JWT token returned (201)
//! 2. **Login**: email + password verified → JWT token returned
//! 3. **Me**: Bearer token verified by middleware → user returned or updated
//! 4. **Reset**: forgot-password stores a code → reset-password consumes it
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt (cost 10) before storage
//! - Tokens are HS256 JWTs and expire after 7 days
//!
//! Socket connections are not authenticated: any client may claim any
//! support user id or room name.

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{AuthResponse, LoginRequest, UserResponse};
pub use handlers::{forgot_password, get_me, login, register, reset_password, update_me};
pub use sessions::{create_token, verify_token, Claims};
