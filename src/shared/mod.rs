//! Shared Module
//!
//! Types shared between the relay, the HTTP layer and the tests: the
//! real-time frame format, shared errors and application configuration.

/// Real-time event frames and namespaces
pub mod event;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use event::{RelayEvent, Namespace, room_key, string_key};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, CloudinaryConfig, ConfigError};
