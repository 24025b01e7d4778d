/**
 * Real-time Event Fan-out
 *
 * Utilities for delivering one event to a set of connection queues.
 *
 * # Delivery
 *
 * Delivery is fire-and-forget: the event is pushed onto each recipient's
 * unbounded outbound queue. A recipient whose socket has already gone away
 * is skipped silently; nothing is retried and the sender is never told.
 * Order across recipients is unspecified.
 */

use crate::backend::realtime::connection::EventSender;
use crate::shared::RelayEvent;

/// Push an event onto one connection's queue
///
/// Returns false if the connection's writer is gone.
pub fn send_event(sender: &EventSender, event: RelayEvent) -> bool {
    sender.send(event).is_ok()
}

/// Deliver an event to every sender yielded by `recipients`
///
/// # Returns
///
/// Number of recipients whose queue accepted the event (0 if none)
pub fn broadcast_event<'a, I>(recipients: I, event: &RelayEvent) -> usize
where
    I: IntoIterator<Item = &'a EventSender>,
{
    let delivered = recipients
        .into_iter()
        .filter(|sender| send_event(sender, event.clone()))
        .count();

    if delivered > 0 {
        tracing::debug!("[Relay] Event '{}' delivered to {} connections", event.event, delivered);
    } else {
        tracing::debug!("[Relay] No recipients for event '{}'", event.event);
    }
    delivered
}
