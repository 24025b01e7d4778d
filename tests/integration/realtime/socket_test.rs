//! Relay scenarios driven over real WebSocket connections
//!
//! Every frame here goes through the router, the upgrade handler and the
//! socket read/write tasks. Relay state is checked through the relay the
//! router was built with.

use crate::common::{create_socket_server, wait_until};
use axum_test::{TestServer, TestWebSocket, WsMessage};
use hth_server::shared::Namespace;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::time::Duration;

async fn open(server: &TestServer, path: &str) -> TestWebSocket {
    server.get_websocket(path).await.into_websocket().await
}

async fn emit(socket: &mut TestWebSocket, event: &str, data: Value) {
    socket.send_json(&json!({"event": event, "data": data})).await;
}

/// Next frame from the server, failing instead of hanging
async fn next_frame(socket: &mut TestWebSocket) -> Value {
    tokio::time::timeout(Duration::from_secs(5), socket.receive_json::<Value>())
        .await
        .expect("Timed out waiting for a frame")
}

#[tokio::test]
async fn test_delete_message_over_the_wire() {
    let (server, relay) = create_socket_server();
    let mut a = open(&server, "/socket").await;
    let mut b = open(&server, "/socket").await;

    emit(&mut a, "joinRoom", json!("room1")).await;
    emit(&mut b, "joinRoom", json!("room1")).await;
    wait_until("both joins", || relay.room_members("room1").len() == 2).await;

    emit(&mut a, "deleteMessage", json!({"msgId": "m1", "chatId": "room1"})).await;

    let expected = json!({"event": "messageDeleted", "data": "m1"});
    assert_eq!(next_frame(&mut a).await, expected);
    assert_eq!(next_frame(&mut b).await, expected);
}

#[tokio::test]
async fn test_typing_is_not_echoed_over_the_wire() {
    let (server, relay) = create_socket_server();
    let mut a = open(&server, "/socket").await;
    let mut b = open(&server, "/socket").await;

    emit(&mut a, "joinRoom", json!("room1")).await;
    emit(&mut b, "joinRoom", json!("room1")).await;
    wait_until("both joins", || relay.room_members("room1").len() == 2).await;

    emit(&mut a, "typing", json!("room1")).await;
    assert_eq!(next_frame(&mut b).await, json!({"event": "typing", "data": "room1"}));

    // A's first frame is the deletion, so the typing event never reached it
    emit(&mut a, "deleteMessage", json!({"msgId": "m2", "chatId": "room1"})).await;
    assert_eq!(next_frame(&mut a).await, json!({"event": "messageDeleted", "data": "m2"}));
}

#[tokio::test]
async fn test_new_comment_reaches_peer_only() {
    let (server, relay) = create_socket_server();
    let mut a = open(&server, "/socket/comments").await;
    let mut b = open(&server, "/socket/comments").await;
    wait_until("both comment sockets", || relay.connection_count(Namespace::Comments) == 2).await;

    emit(&mut a, "newComment", json!({"text": "hi"})).await;
    assert_eq!(next_frame(&mut b).await, json!({"event": "newComment", "data": {"text": "hi"}}));

    emit(&mut a, "deleteComment", json!("c1")).await;
    let deleted = json!({"event": "deleteComment", "data": "c1"});
    assert_eq!(next_frame(&mut a).await, deleted);
    assert_eq!(next_frame(&mut b).await, deleted);
}

#[tokio::test]
async fn test_support_close_clears_presence() {
    let (server, relay) = create_socket_server();
    let mut a = open(&server, "/socket/support").await;

    emit(&mut a, "registerSupportUser", json!("u1")).await;
    wait_until("registration", || relay.support_connection_for("u1").is_some()).await;

    a.close().await;

    wait_until("presence cleanup", || relay.support_connection_for("u1").is_none()).await;
    assert_eq!(relay.connection_count(Namespace::Support), 0);
}

#[tokio::test]
async fn test_chat_close_releases_rooms() {
    let (server, relay) = create_socket_server();
    let mut a = open(&server, "/socket").await;

    emit(&mut a, "joinRoom", json!("room1")).await;
    wait_until("join", || relay.room_members("room1").len() == 1).await;

    a.close().await;

    wait_until("room cleanup", || relay.room_members("room1").is_empty()).await;
    assert_eq!(relay.connection_count(Namespace::Chat), 0);
}

#[tokio::test]
async fn test_bad_frames_are_dropped_without_closing() {
    let (server, relay) = create_socket_server();
    let mut a = open(&server, "/socket/comments").await;
    wait_until("comment socket", || relay.connection_count(Namespace::Comments) == 1).await;

    a.send_text("not json").await;
    a.send_text(r#"{"event":"","data":1}"#).await;
    a.send_text(r#"{"event":"noSuchEvent","data":1}"#).await;
    a.send_message(WsMessage::Binary(vec![0u8, 1, 2].into())).await;

    // The socket is still open and the next reply is for the valid frame
    emit(&mut a, "deleteComment", json!("c9")).await;
    assert_eq!(next_frame(&mut a).await, json!({"event": "deleteComment", "data": "c9"}));
    assert_eq!(relay.connection_count(Namespace::Comments), 1);
}

#[tokio::test]
async fn test_namespaces_are_isolated_over_the_wire() {
    let (server, relay) = create_socket_server();
    let mut chat = open(&server, "/socket").await;
    let mut comments = open(&server, "/socket/comments").await;
    let mut peer = open(&server, "/socket/comments").await;
    wait_until("comment sockets", || relay.connection_count(Namespace::Comments) == 2).await;

    emit(&mut comments, "newComment", json!({"text": "hi"})).await;
    assert_eq!(next_frame(&mut peer).await, json!({"event": "newComment", "data": {"text": "hi"}}));

    // The chat socket's first frame is its own room event
    emit(&mut chat, "joinRoom", json!("solo")).await;
    wait_until("join", || relay.room_members("solo").len() == 1).await;
    emit(&mut chat, "deleteMessage", json!({"msgId": "m3", "chatId": "solo"})).await;
    assert_eq!(next_frame(&mut chat).await, json!({"event": "messageDeleted", "data": "m3"}));
}
