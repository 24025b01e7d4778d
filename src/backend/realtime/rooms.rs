/**
 * Room Manager
 *
 * Tracks which connections are members of which named rooms within one
 * namespace. A room exists only while it has members: it appears on the
 * first join and disappears when its last member is removed.
 *
 * There is no explicit leave. Membership ends when the connection is
 * destroyed, which calls [`RoomManager::remove_connection`].
 */

use crate::backend::realtime::connection::ConnectionId;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default, Clone)]
pub struct RoomManager {
    /// room name -> members
    rooms: HashMap<String, HashSet<ConnectionId>>,
    /// connection -> rooms it joined
    memberships: HashMap<ConnectionId, HashSet<String>>,
}

impl RoomManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `connection` to `room`
    ///
    /// Returns false when the connection was already a member.
    pub fn join(&mut self, connection: ConnectionId, room: impl Into<String>) -> bool {
        let room = room.into();
        let added = self
            .rooms
            .entry(room.clone())
            .or_default()
            .insert(connection);
        self.memberships.entry(connection).or_default().insert(room);
        added
    }

    /// Drop every membership held by `connection`
    ///
    /// Rooms left without members are removed. Returns the rooms the
    /// connection was in.
    pub fn remove_connection(&mut self, connection: ConnectionId) -> Vec<String> {
        let Some(rooms) = self.memberships.remove(&connection) else {
            return Vec::new();
        };

        let mut left = Vec::with_capacity(rooms.len());
        for room in rooms {
            if let Some(members) = self.rooms.get_mut(&room) {
                members.remove(&connection);
                if members.is_empty() {
                    self.rooms.remove(&room);
                }
            }
            left.push(room);
        }
        left
    }

    /// Members of `room` (empty for unknown rooms)
    pub fn members(&self, room: &str) -> Vec<ConnectionId> {
        self.rooms
            .get(room)
            .map(|members| members.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn is_member(&self, connection: ConnectionId, room: &str) -> bool {
        self.rooms
            .get(room)
            .is_some_and(|members| members.contains(&connection))
    }

    /// Rooms `connection` currently belongs to
    pub fn rooms_of(&self, connection: ConnectionId) -> Vec<String> {
        self.memberships
            .get(&connection)
            .map(|rooms| rooms.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn contains_room(&self, room: &str) -> bool {
        self.rooms.contains_key(room)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
