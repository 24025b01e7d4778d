/**
 * Support Namespace
 *
 * - `registerSupportUser(userId)` records `userId -> connection` in the
 *   presence registry. Every payload registers: non-string ids are keyed
 *   by their [`string_key`] text.
 * - `newMessage(message)` is broadcast to every other support connection.
 *   The presence registry is not consulted: there is no directed delivery.
 * - On disconnect the first registry entry pointing at the connection is
 *   removed.
 */

use super::events;
use crate::backend::realtime::connection::ConnectionId;
use crate::backend::realtime::hub::NamespaceHub;
use crate::backend::realtime::presence::PresenceRegistry;
use crate::shared::{string_key, RelayEvent};

/// Inbound events on `/support`
#[derive(Debug, Clone, PartialEq)]
pub enum SupportEvent {
    RegisterSupportUser(serde_json::Value),
    NewMessage(serde_json::Value),
}

impl SupportEvent {
    pub fn parse(event: RelayEvent) -> Option<Self> {
        match event.event.as_str() {
            events::REGISTER_SUPPORT_USER => Some(Self::RegisterSupportUser(event.data)),
            events::NEW_MESSAGE => Some(Self::NewMessage(event.data)),
            _ => None,
        }
    }
}

/// Run one support event; returns the number of deliveries made
pub fn handle_support_event(
    hub: &NamespaceHub,
    presence: &mut PresenceRegistry,
    connection: ConnectionId,
    event: SupportEvent,
) -> usize {
    match event {
        SupportEvent::RegisterSupportUser(user_id) => {
            let user_id = string_key(&user_id);
            tracing::info!("[Relay] Support user {} registered on {}", user_id, connection);
            presence.register(user_id, connection);
            0
        }
        SupportEvent::NewMessage(message) => {
            hub.broadcast_except(connection, &RelayEvent::new(events::NEW_MESSAGE, message))
        }
    }
}

/// Release the presence entry held by a closing support connection
pub fn handle_support_disconnect(presence: &mut PresenceRegistry, connection: ConnectionId) {
    tracing::info!("[Relay] Support connection closed: {}", connection);
    if let Some(user_id) = presence.unregister_by_connection(connection) {
        tracing::debug!("[Relay] Support user {} unregistered", user_id);
    }
}
