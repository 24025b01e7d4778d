/**
 * Comments Namespace
 *
 * - `newComment(data)` goes to every other connection. The author does not
 *   get an echo.
 * - `deleteComment(id)` goes back to the deleting connection AND to every
 *   other connection.
 */

use super::events;
use crate::backend::realtime::connection::ConnectionId;
use crate::backend::realtime::hub::NamespaceHub;
use crate::shared::RelayEvent;

/// Inbound events on `/comments`
#[derive(Debug, Clone, PartialEq)]
pub enum CommentEvent {
    NewComment(serde_json::Value),
    DeleteComment(serde_json::Value),
}

impl CommentEvent {
    pub fn parse(event: RelayEvent) -> Option<Self> {
        match event.event.as_str() {
            events::NEW_COMMENT => Some(Self::NewComment(event.data)),
            events::DELETE_COMMENT => Some(Self::DeleteComment(event.data)),
            _ => None,
        }
    }
}

/// Run one comment event; returns the number of deliveries made
pub fn handle_comment_event(hub: &NamespaceHub, connection: ConnectionId, event: CommentEvent) -> usize {
    match event {
        CommentEvent::NewComment(data) => {
            hub.broadcast_except(connection, &RelayEvent::new(events::NEW_COMMENT, data))
        }
        CommentEvent::DeleteComment(id) => {
            let event = RelayEvent::new(events::DELETE_COMMENT, id);
            let echoed = usize::from(hub.emit_to(connection, event.clone()));
            echoed + hub.broadcast_except(connection, &event)
        }
    }
}

pub fn handle_comments_disconnect(connection: ConnectionId) {
    tracing::info!("[Relay] Comment connection closed: {}", connection);
}
