use crate::error::HubError;
use crate::hub::{Hub, HubEvent};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::error;

/// Cloneable entry point into the hub's event loop.
#[derive(Clone, Debug)]
pub struct HubHandle {
    event_tx: mpsc::Sender<HubEvent>,
}

impl HubHandle {
    /// Moves `hub` onto its own task. The loop ends once every handle is dropped.
    pub fn spawn(hub: Hub, capacity: usize) -> (Self, JoinHandle<()>) {
        let (event_tx, event_rx) = mpsc::channel(capacity.max(1));
        let task = tokio::spawn(hub.run(event_rx));

        (Self { event_tx }, task)
    }

    pub async fn dispatch(&self, event: HubEvent) -> Result<(), HubError> {
        self.event_tx.send(event).await.map_err(|e| {
            error!("Hub died, dropping event from {}", e.0.conn());
            HubError::Stopped
        })
    }
}
