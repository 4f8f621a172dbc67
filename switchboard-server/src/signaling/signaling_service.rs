use crate::error::SignalingError;
use crate::signaling::SignalingOutput;
use async_trait::async_trait;
use axum::extract::ws::Message;
use dashmap::DashMap;
use std::sync::Arc;
use switchboard_core::{ConnectionId, ServerMessage};
use tokio::sync::mpsc;
use tracing::error;

struct SignalingInner {
    connections: DashMap<ConnectionId, mpsc::UnboundedSender<Message>>,
}

/// Registry of live WebSocket connections, addressable by id.
#[derive(Clone)]
pub struct SignalingService {
    inner: Arc<SignalingInner>,
}

impl SignalingService {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SignalingInner {
                connections: DashMap::new(),
            }),
        }
    }

    pub fn add_connection(&self, conn: ConnectionId, tx: mpsc::UnboundedSender<Message>) {
        self.inner.connections.insert(conn, tx);
    }

    pub fn remove_connection(&self, conn: &ConnectionId) {
        self.inner.connections.remove(conn);
    }

    pub fn send_signal(
        &self,
        conn: &ConnectionId,
        msg: &ServerMessage,
    ) -> Result<(), SignalingError> {
        let Some(tx) = self.inner.connections.get(conn) else {
            return Err(SignalingError::UnknownConnection(*conn));
        };

        let json = serde_json::to_string(msg)?;
        tx.send(Message::Text(json.into())).map_err(|e| {
            error!("Failed to send WS message to {}: {:?}", conn, e);
            SignalingError::ChannelClosed(*conn)
        })
    }
}

impl Default for SignalingService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SignalingOutput for SignalingService {
    async fn send(&self, conn: &ConnectionId, msg: ServerMessage) -> Result<(), SignalingError> {
        self.send_signal(conn, &msg)
    }
}
