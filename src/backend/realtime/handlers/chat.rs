/**
 * Chat (Default) Namespace
 *
 * Room-scoped messaging. The relay never validates who may join which room:
 * a client that wants direct messages is expected to `joinRoom` with its own
 * user id, because `sendMessage` targets the room named by `receiverId`.
 *
 * | Inbound         | Outbound         | Recipients                    |
 * |-----------------|------------------|-------------------------------|
 * | `joinRoom`      | -                | -                             |
 * | `deleteMessage` | `messageDeleted` | room `chatId`, sender included |
 * | `typing`        | `typing`         | room, sender excluded         |
 * | `stopTyping`    | `stopTyping`     | room, sender excluded         |
 * | `sendMessage`   | `newMessage`     | room `receiverId`, sender included if member |
 */

use super::events;
use crate::backend::realtime::connection::ConnectionId;
use crate::backend::realtime::hub::NamespaceHub;
use crate::shared::{room_key, RelayEvent};

/// Inbound events on the default namespace
#[derive(Debug, Clone, PartialEq)]
pub enum ChatEvent {
    JoinRoom(serde_json::Value),
    DeleteMessage(serde_json::Value),
    Typing(serde_json::Value),
    StopTyping(serde_json::Value),
    SendMessage(serde_json::Value),
}

impl ChatEvent {
    pub fn parse(event: RelayEvent) -> Option<Self> {
        match event.event.as_str() {
            events::JOIN_ROOM => Some(Self::JoinRoom(event.data)),
            events::DELETE_MESSAGE => Some(Self::DeleteMessage(event.data)),
            events::TYPING => Some(Self::Typing(event.data)),
            events::STOP_TYPING => Some(Self::StopTyping(event.data)),
            events::SEND_MESSAGE => Some(Self::SendMessage(event.data)),
            _ => None,
        }
    }
}

/// Room named by a field of an object payload
fn room_from_field(data: &serde_json::Value, field: &str) -> Option<String> {
    data.as_object()
        .and_then(|obj| obj.get(field))
        .and_then(room_key)
}

/// Run one chat event; returns the number of deliveries made
pub fn handle_chat_event(hub: &mut NamespaceHub, connection: ConnectionId, event: ChatEvent) -> usize {
    match event {
        ChatEvent::JoinRoom(chat_id) => {
            if let Some(room) = room_key(&chat_id) {
                if hub.join(connection, room.clone()) {
                    tracing::info!("[Relay] {} joined chat room {}", connection, room);
                }
            } else {
                tracing::debug!("[Relay] joinRoom without a usable room name: {}", chat_id);
            }
            0
        }
        ChatEvent::DeleteMessage(data) => {
            let Some(room) = room_from_field(&data, "chatId") else {
                return 0;
            };
            let msg_id = data.get("msgId").cloned().unwrap_or(serde_json::Value::Null);
            hub.emit_to_room(&room, &RelayEvent::new(events::MESSAGE_DELETED, msg_id), None)
        }
        ChatEvent::Typing(chat_id) => relay_to_room_peers(hub, connection, events::TYPING, chat_id),
        ChatEvent::StopTyping(chat_id) => relay_to_room_peers(hub, connection, events::STOP_TYPING, chat_id),
        ChatEvent::SendMessage(message) => {
            let Some(room) = room_from_field(&message, "receiverId") else {
                return 0;
            };
            hub.emit_to_room(&room, &RelayEvent::new(events::NEW_MESSAGE, message), None)
        }
    }
}

/// Echo `chat_id` under `name` to the room's other members
fn relay_to_room_peers(hub: &NamespaceHub, connection: ConnectionId, name: &str, chat_id: serde_json::Value) -> usize {
    let Some(room) = room_key(&chat_id) else {
        return 0;
    };
    hub.emit_to_room(&room, &RelayEvent::new(name, chat_id), Some(connection))
}

pub fn handle_chat_disconnect(connection: ConnectionId) {
    tracing::info!("[Relay] Chat connection closed: {}", connection);
}
