/**
 * Presence Registry
 *
 * Maps a durable user identifier to the connection it most recently
 * registered from. Used by the support namespace.
 *
 * # Semantics
 *
 * - `register` always overwrites (last write wins). Nothing checks that
 *   the previously registered connection is still open.
 * - `unregister_by_connection` scans entries in registration order and
 *   removes only the first one pointing at the connection. Any further
 *   entries for the same connection are left in place.
 *
 * Entries are kept in registration order; an overwrite keeps the user's
 * original position.
 */

use crate::backend::realtime::connection::ConnectionId;

/// One user -> connection mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceEntry {
    pub user_id: String,
    pub connection: ConnectionId,
}

/// Registry of support users and their live connections
#[derive(Debug, Default, Clone)]
pub struct PresenceRegistry {
    entries: Vec<PresenceEntry>,
}

impl PresenceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the mapping for `user_id`
    pub fn register(&mut self, user_id: impl Into<String>, connection: ConnectionId) {
        let user_id = user_id.into();
        match self.entries.iter_mut().find(|e| e.user_id == user_id) {
            Some(entry) => entry.connection = connection,
            None => self.entries.push(PresenceEntry { user_id, connection }),
        }
    }

    /// Current connection for `user_id`, if any
    pub fn lookup(&self, user_id: &str) -> Option<ConnectionId> {
        self.entries
            .iter()
            .find(|e| e.user_id == user_id)
            .map(|e| e.connection)
    }

    /// Remove the first entry pointing at `connection` and stop
    ///
    /// Returns the user whose entry was removed.
    pub fn unregister_by_connection(&mut self, connection: ConnectionId) -> Option<String> {
        let index = self.entries.iter().position(|e| e.connection == connection)?;
        Some(self.entries.remove(index).user_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in registration order
    pub fn entries(&self) -> impl Iterator<Item = &PresenceEntry> {
        self.entries.iter()
    }
}
