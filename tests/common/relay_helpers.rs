//! Relay test helpers
//!
//! Wraps a relay connection so tests can emit events as that client and
//! inspect what the relay queued for it.

use hth_server::backend::realtime::{ConnectionId, RealtimeRelay, RelayConnection};
use hth_server::shared::{Namespace, RelayEvent};
use serde_json::Value;

/// One simulated socket client
pub struct TestClient {
    pub connection: RelayConnection,
}

impl TestClient {
    /// Connect a new client to `namespace`
    pub fn connect(relay: &RealtimeRelay, namespace: Namespace) -> Self {
        Self {
            connection: relay.connect(namespace),
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.connection.id
    }

    /// Send an event as this client, returning the number of deliveries
    pub fn emit(&self, relay: &RealtimeRelay, event: &str, data: Value) -> usize {
        relay.handle(
            self.connection.namespace,
            self.connection.id,
            RelayEvent::new(event, data),
        )
    }

    /// Next queued event, if any
    pub fn try_next(&mut self) -> Option<RelayEvent> {
        self.connection.receiver.try_recv().ok()
    }

    /// Everything queued so far
    pub fn drain(&mut self) -> Vec<RelayEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_next() {
            events.push(event);
        }
        events
    }

    pub fn disconnect(&self, relay: &RealtimeRelay) {
        relay.disconnect(self.connection.namespace, self.connection.id);
    }
}

/// Connect `count` clients to the same namespace
pub fn connect_many(relay: &RealtimeRelay, namespace: Namespace, count: usize) -> Vec<TestClient> {
    (0..count).map(|_| TestClient::connect(relay, namespace)).collect()
}
