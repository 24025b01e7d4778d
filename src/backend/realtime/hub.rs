/**
 * Namespace Hub
 *
 * The connection set and room table of one namespace, plus the three ways
 * a handler can address them:
 *
 * - `emit_to` - one connection
 * - `broadcast_except` - every connection but one
 * - `emit_to_room` - every member of a room, optionally minus one
 */

use crate::backend::realtime::broadcast::{broadcast_event, send_event};
use crate::backend::realtime::connection::{ConnectionId, EventSender};
use crate::backend::realtime::rooms::RoomManager;
use crate::shared::{Namespace, RelayEvent};
use std::collections::HashMap;

#[derive(Debug)]
pub struct NamespaceHub {
    namespace: Namespace,
    connections: HashMap<ConnectionId, EventSender>,
    rooms: RoomManager,
}

impl NamespaceHub {
    pub fn new(namespace: Namespace) -> Self {
        Self {
            namespace,
            connections: HashMap::new(),
            rooms: RoomManager::new(),
        }
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// Register a freshly connected socket
    pub fn add(&mut self, id: ConnectionId, sender: EventSender) {
        self.connections.insert(id, sender);
    }

    /// Destroy a connection and release its room memberships
    ///
    /// Dropping the stored sender closes the connection's outbound queue.
    pub fn remove(&mut self, id: ConnectionId) -> bool {
        self.rooms.remove_connection(id);
        self.connections.remove(&id).is_some()
    }

    pub fn contains(&self, id: ConnectionId) -> bool {
        self.connections.contains_key(&id)
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Join a room; unknown connections are ignored
    pub fn join(&mut self, id: ConnectionId, room: impl Into<String>) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.rooms.join(id, room)
    }

    pub fn rooms(&self) -> &RoomManager {
        &self.rooms
    }

    /// Deliver to a single connection
    pub fn emit_to(&self, id: ConnectionId, event: RelayEvent) -> bool {
        match self.connections.get(&id) {
            Some(sender) => send_event(sender, event),
            None => false,
        }
    }

    /// Deliver to every connection in the namespace except `exclude`
    pub fn broadcast_except(&self, exclude: ConnectionId, event: &RelayEvent) -> usize {
        let recipients = self
            .connections
            .iter()
            .filter(|(id, _)| **id != exclude)
            .map(|(_, sender)| sender);
        broadcast_event(recipients, event)
    }

    /// Deliver to every member of `room`, skipping `exclude` if given
    pub fn emit_to_room(&self, room: &str, event: &RelayEvent, exclude: Option<ConnectionId>) -> usize {
        let members = self.rooms.members(room);
        let recipients = members
            .iter()
            .filter(|id| Some(**id) != exclude)
            .filter_map(|id| self.connections.get(id));
        broadcast_event(recipients, event)
    }
}
