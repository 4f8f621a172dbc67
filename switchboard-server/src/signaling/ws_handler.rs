use crate::app::AppState;
use crate::hub::HubEvent;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use switchboard_core::{ClientMessage, ConnectionId, ServerMessage};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let conn = ConnectionId::new();
    info!("New WebSocket connection: {}", conn);

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    state.signaling.add_connection(conn, tx);
    if let Err(e) = state
        .signaling
        .send_signal(&conn, &ServerMessage::Welcome { id: conn })
    {
        warn!("Failed to greet {}: {}", conn, e);
    }

    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let recv_task = tokio::spawn({
        let state = state.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                        Ok(client_msg) => {
                            let event = HubEvent::from_client(conn, client_msg);
                            if state.hub.dispatch(event).await.is_err() {
                                break;
                            }
                        }
                        Err(e) => warn!("Invalid frame from {}: {}", conn, e),
                    },
                    Message::Close(_) => break,
                    Message::Binary(_) => debug!("Ignoring binary frame from {}", conn),
                    _ => {}
                }
            }
        }
    });

    wind_down(send_task, recv_task).await;

    state.signaling.remove_connection(&conn);
    let _ = state.hub.dispatch(HubEvent::Disconnect { conn }).await;
    info!("WebSocket disconnected: {}", conn);
}

/// Returns once neither task is running, so every event the receiver
/// dispatched is queued ahead of the connection's `Disconnect`.
async fn wind_down(mut send_task: JoinHandle<()>, mut recv_task: JoinHandle<()>) {
    let recv_finished = tokio::select! {
        _ = (&mut send_task) => false,
        _ = (&mut recv_task) => true,
    };

    if recv_finished {
        send_task.abort();
    } else {
        recv_task.abort();
        let _ = recv_task.await;
    }
}
