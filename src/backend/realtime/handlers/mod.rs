//! Namespace Event Handlers
//!
//! One submodule per namespace. Each exposes a typed view of the inbound
//! events it understands (`parse` returns `None` for anything else) and a
//! handler that runs the event to completion against the namespace hub.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Event names
//! ├── support.rs  - /support: registerSupportUser, newMessage
//! ├── comments.rs - /comments: newComment, deleteComment
//! └── chat.rs     - /: joinRoom, deleteMessage, typing, stopTyping, sendMessage
//! ```

/// Support namespace handlers
pub mod support;

/// Comments namespace handlers
pub mod comments;

/// Default (chat) namespace handlers
pub mod chat;

/// Wire names of every event the relay reads or writes
pub mod events {
    pub const REGISTER_SUPPORT_USER: &str = "registerSupportUser";
    pub const NEW_MESSAGE: &str = "newMessage";
    pub const NEW_COMMENT: &str = "newComment";
    pub const DELETE_COMMENT: &str = "deleteComment";
    pub const JOIN_ROOM: &str = "joinRoom";
    pub const DELETE_MESSAGE: &str = "deleteMessage";
    pub const MESSAGE_DELETED: &str = "messageDeleted";
    pub const TYPING: &str = "typing";
    pub const STOP_TYPING: &str = "stopTyping";
    pub const SEND_MESSAGE: &str = "sendMessage";
}

pub use chat::{handle_chat_disconnect, handle_chat_event, ChatEvent};
pub use comments::{handle_comment_event, handle_comments_disconnect, CommentEvent};
pub use support::{handle_support_disconnect, handle_support_event, SupportEvent};
