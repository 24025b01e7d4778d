//! Relay scenarios across all three namespaces

use crate::assert_no_event;
use crate::common::{connect_many, TestClient};
use hth_server::backend::realtime::RealtimeRelay;
use hth_server::shared::{Namespace, RelayEvent};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_delete_message_reaches_whole_room_including_sender() {
    let relay = RealtimeRelay::new();
    let mut a = TestClient::connect(&relay, Namespace::Chat);
    let mut b = TestClient::connect(&relay, Namespace::Chat);

    a.emit(&relay, "joinRoom", json!("room1"));
    b.emit(&relay, "joinRoom", json!("room1"));
    let delivered = a.emit(&relay, "deleteMessage", json!({"msgId": "m1", "chatId": "room1"}));

    assert_eq!(delivered, 2);
    let expected = RelayEvent::new("messageDeleted", json!("m1"));
    assert_eq!(a.drain(), vec![expected.clone()]);
    assert_eq!(b.drain(), vec![expected]);
}

#[test]
fn test_delete_message_without_room_is_a_no_op() {
    let relay = RealtimeRelay::new();
    let mut a = TestClient::connect(&relay, Namespace::Chat);
    a.emit(&relay, "joinRoom", json!("room1"));

    assert_eq!(a.emit(&relay, "deleteMessage", json!({"msgId": "m1"})), 0);
    assert_eq!(a.emit(&relay, "deleteMessage", json!({"msgId": "m1", "chatId": "nobody"})), 0);
    assert_no_event!(a);
}

#[test]
fn test_typing_indicators_skip_sender() {
    let relay = RealtimeRelay::new();
    let mut clients = connect_many(&relay, Namespace::Chat, 3);
    for client in &clients {
        client.emit(&relay, "joinRoom", json!("room1"));
    }

    assert_eq!(clients[0].emit(&relay, "typing", json!("room1")), 2);
    assert_eq!(clients[0].emit(&relay, "stopTyping", json!("room1")), 2);

    assert_no_event!(clients[0]);
    for client in clients.iter_mut().skip(1) {
        assert_eq!(
            client.drain(),
            vec![
                RelayEvent::new("typing", json!("room1")),
                RelayEvent::new("stopTyping", json!("room1")),
            ]
        );
    }
}

#[test]
fn test_send_message_targets_receiver_room() {
    let relay = RealtimeRelay::new();
    let mut alice = TestClient::connect(&relay, Namespace::Chat);
    let mut bob = TestClient::connect(&relay, Namespace::Chat);
    let mut carol = TestClient::connect(&relay, Namespace::Chat);

    alice.emit(&relay, "joinRoom", json!("alice"));
    bob.emit(&relay, "joinRoom", json!("bob"));
    carol.emit(&relay, "joinRoom", json!("carol"));

    let message = json!({"senderId": "alice", "receiverId": "bob", "text": "hello"});
    assert_eq!(alice.emit(&relay, "sendMessage", message.clone()), 1);

    assert_eq!(bob.drain(), vec![RelayEvent::new("newMessage", message)]);
    assert_no_event!(alice);
    assert_no_event!(carol);
}

#[test]
fn test_send_message_to_absent_receiver_is_dropped() {
    let relay = RealtimeRelay::new();
    let mut alice = TestClient::connect(&relay, Namespace::Chat);
    alice.emit(&relay, "joinRoom", json!("alice"));

    let delivered = alice.emit(&relay, "sendMessage", json!({"receiverId": "offline", "text": "hi"}));

    assert_eq!(delivered, 0);
    assert_no_event!(alice);
}

#[test]
fn test_numeric_room_names_match_their_string_form() {
    let relay = RealtimeRelay::new();
    let mut a = TestClient::connect(&relay, Namespace::Chat);
    let mut b = TestClient::connect(&relay, Namespace::Chat);

    a.emit(&relay, "joinRoom", json!(42));
    b.emit(&relay, "joinRoom", json!("42"));

    assert_eq!(relay.room_members("42").len(), 2);
    assert_eq!(a.emit(&relay, "typing", json!(42)), 1);
    assert_eq!(b.drain(), vec![RelayEvent::new("typing", json!(42))]);
}

#[test]
fn test_joining_twice_keeps_single_membership() {
    let relay = RealtimeRelay::new();
    let a = TestClient::connect(&relay, Namespace::Chat);

    a.emit(&relay, "joinRoom", json!("room1"));
    a.emit(&relay, "joinRoom", json!("room1"));

    assert_eq!(relay.room_members("room1"), vec![a.id()]);
    assert_eq!(relay.rooms_of(a.id()), vec!["room1".to_string()]);
}

#[test]
fn test_chat_disconnect_releases_rooms() {
    let relay = RealtimeRelay::new();
    let a = TestClient::connect(&relay, Namespace::Chat);
    let mut b = TestClient::connect(&relay, Namespace::Chat);
    a.emit(&relay, "joinRoom", json!("room1"));
    b.emit(&relay, "joinRoom", json!("room1"));

    a.disconnect(&relay);

    assert_eq!(relay.room_members("room1"), vec![b.id()]);
    assert_eq!(relay.connection_count(Namespace::Chat), 1);
    assert_eq!(b.emit(&relay, "deleteMessage", json!({"msgId": "m2", "chatId": "room1"})), 1);
    assert_eq!(b.drain(), vec![RelayEvent::new("messageDeleted", json!("m2"))]);
}

#[test]
fn test_new_comment_skips_sender() {
    let relay = RealtimeRelay::new();
    let mut a = TestClient::connect(&relay, Namespace::Comments);
    let mut b = TestClient::connect(&relay, Namespace::Comments);

    assert_eq!(a.emit(&relay, "newComment", json!({"text": "hi"})), 1);

    assert_eq!(b.drain(), vec![RelayEvent::new("newComment", json!({"text": "hi"}))]);
    assert_no_event!(a);
}

#[test]
fn test_delete_comment_echoes_to_sender_and_others() {
    let relay = RealtimeRelay::new();
    let mut clients = connect_many(&relay, Namespace::Comments, 3);

    clients[0].emit(&relay, "deleteComment", json!("c1"));

    let expected = RelayEvent::new("deleteComment", json!("c1"));
    for client in clients.iter_mut() {
        assert_eq!(client.drain(), vec![expected.clone()]);
    }
}

#[test]
fn test_support_disconnect_clears_presence() {
    let relay = RealtimeRelay::new();
    let a = TestClient::connect(&relay, Namespace::Support);

    a.emit(&relay, "registerSupportUser", json!("u1"));
    assert_eq!(relay.support_connection_for("u1"), Some(a.id()));

    a.disconnect(&relay);
    assert_eq!(relay.support_connection_for("u1"), None);
    assert_eq!(relay.support_user_count(), 0);
}

#[test]
fn test_support_registration_keys_any_payload() {
    let relay = RealtimeRelay::new();
    let a = TestClient::connect(&relay, Namespace::Support);

    a.emit(&relay, "registerSupportUser", json!(null));
    a.emit(&relay, "registerSupportUser", json!({"id": "u1"}));

    assert_eq!(relay.support_user_count(), 2);
    assert_eq!(relay.support_connection_for("null"), Some(a.id()));
    assert_eq!(relay.support_connection_for("[object Object]"), Some(a.id()));

    // Only the first entry for the connection is released
    a.disconnect(&relay);
    assert_eq!(relay.support_connection_for("null"), None);
    assert_eq!(relay.support_connection_for("[object Object]"), Some(a.id()));
    assert_eq!(relay.support_user_count(), 1);
}

#[test]
fn test_support_registration_is_last_write_wins() {
    let relay = RealtimeRelay::new();
    let first = TestClient::connect(&relay, Namespace::Support);
    let second = TestClient::connect(&relay, Namespace::Support);

    first.emit(&relay, "registerSupportUser", json!("agent"));
    second.emit(&relay, "registerSupportUser", json!("agent"));

    assert_eq!(relay.support_connection_for("agent"), Some(second.id()));
    assert_eq!(relay.support_user_count(), 1);

    // The overwritten connection no longer owns an entry
    first.disconnect(&relay);
    assert_eq!(relay.support_connection_for("agent"), Some(second.id()));
}

#[test]
fn test_support_message_broadcasts_to_peers() {
    let relay = RealtimeRelay::new();
    let mut sender = TestClient::connect(&relay, Namespace::Support);
    let mut agent = TestClient::connect(&relay, Namespace::Support);
    let mut other = TestClient::connect(&relay, Namespace::Support);
    agent.emit(&relay, "registerSupportUser", json!("agent"));

    let message = json!({"to": "agent", "text": "help"});
    assert_eq!(sender.emit(&relay, "newMessage", message.clone()), 2);

    assert_no_event!(sender);
    assert_eq!(agent.drain(), vec![RelayEvent::new("newMessage", message.clone())]);
    assert_eq!(other.drain(), vec![RelayEvent::new("newMessage", message)]);
}

#[test]
fn test_namespaces_do_not_share_traffic() {
    let relay = RealtimeRelay::new();
    let mut chat = TestClient::connect(&relay, Namespace::Chat);
    let mut support = TestClient::connect(&relay, Namespace::Support);
    let comments = TestClient::connect(&relay, Namespace::Comments);

    comments.emit(&relay, "newComment", json!({"text": "hi"}));
    comments.emit(&relay, "deleteComment", json!("c1"));

    assert_no_event!(chat);
    assert_no_event!(support);
}

#[test]
fn test_events_from_other_namespaces_are_ignored() {
    let relay = RealtimeRelay::new();
    let a = TestClient::connect(&relay, Namespace::Comments);
    let mut b = TestClient::connect(&relay, Namespace::Comments);

    assert_eq!(a.emit(&relay, "joinRoom", json!("room1")), 0);
    assert_eq!(a.emit(&relay, "registerSupportUser", json!("u1")), 0);
    assert_eq!(a.emit(&relay, "unknownEvent", json!(null)), 0);

    assert!(relay.room_members("room1").is_empty());
    assert_eq!(relay.support_user_count(), 0);
    assert_no_event!(b);
}

#[test]
fn test_reconnect_starts_fresh() {
    let relay = RealtimeRelay::new();
    let first = TestClient::connect(&relay, Namespace::Chat);
    first.emit(&relay, "joinRoom", json!("room1"));
    first.disconnect(&relay);

    let second = TestClient::connect(&relay, Namespace::Chat);

    assert_ne!(first.id(), second.id());
    assert!(relay.rooms_of(second.id()).is_empty());
    assert!(relay.room_members("room1").is_empty());
}

#[tokio::test]
async fn test_relay_is_shared_across_tasks() {
    let relay = RealtimeRelay::new();
    let mut listener = TestClient::connect(&relay, Namespace::Comments);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let relay = relay.clone();
            tokio::spawn(async move {
                let client = TestClient::connect(&relay, Namespace::Comments);
                client.emit(&relay, "newComment", json!({"n": i}));
                client.disconnect(&relay);
            })
        })
        .collect();

    for handle in handles {
        handle.await.expect("task panicked");
    }

    assert_eq!(listener.drain().len(), 8);
    assert_eq!(relay.connection_count(Namespace::Comments), 1);
}
