/**
 * WebSocket Transport
 *
 * One route per namespace. Each accepted socket is split: a spawned task
 * drains the connection's outbound queue into the socket, while the
 * upgrade task reads frames and hands them to the relay. When the read
 * side ends the connection is removed from the relay, which drops its
 * queue and lets the writer finish.
 */

use crate::backend::realtime::relay::RealtimeRelay;
use crate::shared::{Namespace, RelayEvent};
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures_util::{SinkExt, StreamExt};

/// `GET /socket` (default chat namespace)
pub async fn chat_socket(ws: WebSocketUpgrade, State(relay): State<RealtimeRelay>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| serve_socket(socket, relay, Namespace::Chat))
}

/// `GET /socket/support`
pub async fn support_socket(ws: WebSocketUpgrade, State(relay): State<RealtimeRelay>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| serve_socket(socket, relay, Namespace::Support))
}

/// `GET /socket/comments`
pub async fn comments_socket(ws: WebSocketUpgrade, State(relay): State<RealtimeRelay>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| serve_socket(socket, relay, Namespace::Comments))
}

/// Drive one socket until either side closes
pub async fn serve_socket(socket: WebSocket, relay: RealtimeRelay, namespace: Namespace) {
    let connection = relay.connect(namespace);
    let conn_id = connection.id;
    let mut outbound = connection.receiver;
    tracing::info!("[Socket] {} opened on {}", conn_id, namespace);

    let (mut ws_sender, mut ws_receiver) = socket.split();

    let send_task = tokio::spawn(async move {
        while let Some(event) = outbound.recv().await {
            match event.to_text() {
                Ok(json) => {
                    if ws_sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("[Socket] Failed to serialize {}: {}", event.event, e);
                }
            }
        }
    });

    while let Some(result) = ws_receiver.next().await {
        match result {
            Ok(Message::Text(text)) => match RelayEvent::from_text(text.as_str()) {
                Ok(event) => {
                    relay.handle(namespace, conn_id, event);
                }
                Err(e) => {
                    tracing::warn!("[Socket] Dropping malformed frame from {}: {}", conn_id, e);
                }
            },
            Ok(Message::Binary(_)) => {
                tracing::debug!("[Socket] Ignoring binary frame from {}", conn_id);
            }
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("[Socket] {} read error: {}", conn_id, e);
                break;
            }
        }
    }

    relay.disconnect(namespace, conn_id);
    send_task.abort();
    tracing::info!("[Socket] {} closed on {}", conn_id, namespace);
}
