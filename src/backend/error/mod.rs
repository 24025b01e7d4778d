//! Backend Error Module
//!
//! Error types for the HTTP layer and their conversion into responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Types
//!
//! - `HandlerError` - Request-level failures with an explicit status
//! - `DatabaseError` / `HashError` / `AuthError` / `MediaError` - wrapped
//!   infrastructure failures
//!
//! The relay never produces these: socket events have no error path back
//! to the sender.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::BackendError;

/// Result alias used by the HTTP handlers
pub type BackendResult<T> = Result<T, BackendError>;
