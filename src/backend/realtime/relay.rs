/**
 * Realtime Relay
 *
 * Owns every piece of real-time state in the process: one hub per
 * namespace and the support presence registry. All access goes through a
 * single lock, so every event and every disconnect runs to completion
 * before the next one starts. Fan-out only pushes onto unbounded queues,
 * which never blocks while the lock is held.
 *
 * The relay is cheap to clone and is stored in the axum application state.
 */

use crate::backend::realtime::connection::{outbound_channel, ConnectionId, RelayConnection};
use crate::backend::realtime::handlers::{
    handle_chat_disconnect, handle_chat_event, handle_comment_event, handle_comments_disconnect,
    handle_support_disconnect, handle_support_event, ChatEvent, CommentEvent, SupportEvent,
};
use crate::backend::realtime::hub::NamespaceHub;
use crate::backend::realtime::presence::PresenceRegistry;
use crate::shared::{Namespace, RelayEvent};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
struct RelayState {
    chat: NamespaceHub,
    support: NamespaceHub,
    comments: NamespaceHub,
    presence: PresenceRegistry,
}

impl RelayState {
    fn new() -> Self {
        Self {
            chat: NamespaceHub::new(Namespace::Chat),
            support: NamespaceHub::new(Namespace::Support),
            comments: NamespaceHub::new(Namespace::Comments),
            presence: PresenceRegistry::new(),
        }
    }

    fn hub(&self, namespace: Namespace) -> &NamespaceHub {
        match namespace {
            Namespace::Chat => &self.chat,
            Namespace::Support => &self.support,
            Namespace::Comments => &self.comments,
        }
    }

    fn hub_mut(&mut self, namespace: Namespace) -> &mut NamespaceHub {
        match namespace {
            Namespace::Chat => &mut self.chat,
            Namespace::Support => &mut self.support,
            Namespace::Comments => &mut self.comments,
        }
    }
}

/// Shared handle to the relay state
#[derive(Debug, Clone)]
pub struct RealtimeRelay {
    state: Arc<Mutex<RelayState>>,
}

impl Default for RealtimeRelay {
    fn default() -> Self {
        Self::new()
    }
}

impl RealtimeRelay {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(RelayState::new())),
        }
    }

    // A handler that panicked mid-event leaves the state as it was at the
    // panic point; later events keep being served from it.
    fn lock(&self) -> MutexGuard<'_, RelayState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Open a connection in `namespace`
    ///
    /// The returned receiver yields every event addressed to the connection
    /// until `disconnect` is called.
    pub fn connect(&self, namespace: Namespace) -> RelayConnection {
        let id = ConnectionId::generate();
        let (sender, receiver) = outbound_channel();
        self.lock().hub_mut(namespace).add(id, sender);
        tracing::info!("[Relay] {} connected on {}", id, namespace);
        RelayConnection { id, namespace, receiver }
    }

    /// Dispatch one inbound event; returns the number of deliveries made
    ///
    /// Events from unknown connections and unknown event names are ignored.
    pub fn handle(&self, namespace: Namespace, connection: ConnectionId, event: RelayEvent) -> usize {
        let mut state = self.lock();
        if !state.hub(namespace).contains(connection) {
            tracing::debug!("[Relay] Dropping {} from unknown connection {}", event.event, connection);
            return 0;
        }

        let name = event.event.clone();
        let delivered = match namespace {
            Namespace::Support => match SupportEvent::parse(event) {
                Some(event) => {
                    let RelayState { support, presence, .. } = &mut *state;
                    Some(handle_support_event(support, presence, connection, event))
                }
                None => None,
            },
            Namespace::Comments => {
                CommentEvent::parse(event).map(|event| handle_comment_event(&state.comments, connection, event))
            }
            Namespace::Chat => {
                ChatEvent::parse(event).map(|event| handle_chat_event(&mut state.chat, connection, event))
            }
        };

        match delivered {
            Some(count) => {
                tracing::debug!("[Relay] {} {} from {} -> {} recipient(s)", namespace, name, connection, count);
                count
            }
            None => {
                tracing::debug!("[Relay] Ignoring unknown event {} on {}", name, namespace);
                0
            }
        }
    }

    /// Tear down a connection: namespace hooks first, then rooms and queue
    pub fn disconnect(&self, namespace: Namespace, connection: ConnectionId) {
        let mut state = self.lock();
        if !state.hub(namespace).contains(connection) {
            return;
        }
        match namespace {
            Namespace::Support => handle_support_disconnect(&mut state.presence, connection),
            Namespace::Comments => handle_comments_disconnect(connection),
            Namespace::Chat => handle_chat_disconnect(connection),
        }
        state.hub_mut(namespace).remove(connection);
    }

    /// Connection currently registered for a support user
    ///
    /// Support messages are broadcast, so no handler reads this for
    /// delivery. It reflects the registry as-is, stale entries included.
    pub fn support_connection_for(&self, user_id: &str) -> Option<ConnectionId> {
        self.lock().presence.lookup(user_id)
    }

    pub fn support_user_count(&self) -> usize {
        self.lock().presence.len()
    }

    pub fn connection_count(&self, namespace: Namespace) -> usize {
        self.lock().hub(namespace).connection_count()
    }

    /// Members of a room in the default namespace
    pub fn room_members(&self, room: &str) -> Vec<ConnectionId> {
        self.lock().chat.rooms().members(room)
    }

    /// Rooms a default-namespace connection has joined
    pub fn rooms_of(&self, connection: ConnectionId) -> Vec<String> {
        self.lock().chat.rooms().rooms_of(connection)
    }
}
