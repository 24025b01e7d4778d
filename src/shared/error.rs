//! Shared Error Types
//!
//! Errors raised while reading or writing realtime frames. The relay never
//! reports these back to the sender; the socket layer logs them and drops
//! the frame.
//!
//! ```rust
//! use hth_server::shared::{RelayEvent, SharedError};
//!
//! let err = RelayEvent::from_text("not json").unwrap_err();
//! assert!(matches!(err, SharedError::MalformedFrame { .. }));
//! ```
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Inbound text was not an `{"event", "data"}` object
    #[error("Malformed frame: {reason}")]
    MalformedFrame { reason: String },

    /// Frame parsed but carried an empty event name
    #[error("Frame has no event name")]
    MissingEventName,

    /// Outbound frame could not be encoded
    #[error("Failed to encode frame: {reason}")]
    EncodeFailed { reason: String },
}

impl SharedError {
    pub fn malformed(err: serde_json::Error) -> Self {
        Self::MalformedFrame {
            reason: err.to_string(),
        }
    }

    pub fn encode_failed(err: serde_json::Error) -> Self {
        Self::EncodeFailed {
            reason: err.to_string(),
        }
    }
}
