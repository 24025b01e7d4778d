/**
 * Relay Connections
 *
 * A connection is one live socket session inside one namespace. The relay
 * only ever holds the sending half of the connection's outbound queue; the
 * socket task owns the receiving half and writes whatever arrives to the
 * wire. Dropping the sender (on disconnect) ends that writer.
 */

use crate::shared::{Namespace, RelayEvent};
use tokio::sync::mpsc;
use uuid::Uuid;

/// Outbound queue feeding one socket
pub type EventSender = mpsc::UnboundedSender<RelayEvent>;

/// Receiving half handed to the socket writer
pub type EventReceiver = mpsc::UnboundedReceiver<RelayEvent>;

/// Opaque identifier of a live connection
///
/// Identifiers are never reused: a reconnecting client always gets a fresh
/// one and carries no state over from its previous connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    /// Generate a new unique connection ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "conn-{}", self.0.simple())
    }
}

/// Handle returned to the transport when a socket connects
#[derive(Debug)]
pub struct RelayConnection {
    /// Identifier to pass back on every event and on disconnect
    pub id: ConnectionId,
    /// Namespace this connection belongs to
    pub namespace: Namespace,
    /// Events the relay wants delivered to this socket
    pub receiver: EventReceiver,
}

/// Create the outbound queue for a new connection
pub fn outbound_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}
