use crate::error::SignalingError;
use async_trait::async_trait;
use switchboard_core::{ConnectionId, ServerMessage};

/// Implemented by the transport so the hub can reach connected clients.
///
/// `send` must not wait for the client; it only enqueues.
#[async_trait]
pub trait SignalingOutput: Send + Sync {
    async fn send(&self, conn: &ConnectionId, msg: ServerMessage) -> Result<(), SignalingError>;
}
