/**
 * Real-time Event Frames
 *
 * This module defines the frame exchanged over every relay socket. A frame
 * is a named event plus an arbitrary JSON payload:
 *
 * ```json
 * {"event": "joinRoom", "data": "chat-42"}
 * ```
 *
 * Payloads are never validated. Whatever the sender provides is relayed
 * verbatim; only the routing fields a handler needs (`chatId`,
 * `receiverId`) are looked at.
 */
use serde::{Deserialize, Serialize};
use crate::shared::SharedError;

/// Logical channel a socket is connected to
///
/// Each namespace has its own connection set, its own rooms and its own
/// event handlers. Connections in different namespaces never see each
/// other's events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Namespace {
    /// Default namespace: direct messages, typing indicators, deletions
    Chat,
    /// Support channel: support-user registration and support messages
    Support,
    /// Live comment creation/deletion
    Comments,
}

impl Namespace {
    /// Namespace path as clients address it (`/`, `/support`, `/comments`)
    pub fn path(&self) -> &'static str {
        match self {
            Namespace::Chat => "/",
            Namespace::Support => "/support",
            Namespace::Comments => "/comments",
        }
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// One named event with its payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelayEvent {
    /// Event name (`newMessage`, `typing`, ...)
    pub event: String,
    /// Event payload, relayed as-is
    #[serde(default)]
    pub data: serde_json::Value,
}

impl RelayEvent {
    /// Create a new event frame
    pub fn new(event: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            event: event.into(),
            data,
        }
    }

    /// Parse a text frame received from a client
    pub fn from_text(text: &str) -> Result<Self, SharedError> {
        let event: RelayEvent = serde_json::from_str(text).map_err(SharedError::malformed)?;
        if event.event.is_empty() {
            return Err(SharedError::MissingEventName);
        }
        Ok(event)
    }

    /// Serialize the frame for sending
    pub fn to_text(&self) -> Result<String, SharedError> {
        serde_json::to_string(self).map_err(SharedError::encode_failed)
    }
}

/// Turn a payload value into a room name
///
/// Strings are used as-is, numbers and booleans by their JSON text. Null,
/// arrays and objects never name a room.
pub fn room_key(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Turn any payload value into a registry key
///
/// Follows JavaScript string conversion, so every value yields a key:
/// `null` is `"null"`, objects are `"[object Object]"` and arrays join
/// their elements with commas (null elements become empty). A frame sent
/// without `data` arrives as `null`.
pub fn string_key(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => number_text(n),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(|item| match item {
                serde_json::Value::Null => String::new(),
                other => string_key(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        serde_json::Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Whole floats print without a fraction (`1.0` is `"1"`)
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if !n.is_i64() && !n.is_u64() && f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => {
            if f == 0.0 {
                "0".to_string()
            } else {
                format!("{:.0}", f)
            }
        }
        _ => n.to_string(),
    }
}
