use std::sync::Arc;
use switchboard_core::ServerMessage;
use switchboard_server::{Hub, HubEvent, HubHandle};

use crate::integration::init_tracing;
use crate::utils::MockSignalingOutput;

#[tokio::test]
async fn test_hub_handle_serializes_events() {
    init_tracing();

    let signaling = MockSignalingOutput::new();
    let hub = Hub::new(Arc::new(signaling.clone()));
    let (handle, task) = HubHandle::spawn(hub, 16);

    let a = signaling.connect().await;
    let b = signaling.connect().await;

    // Dispatch from two tasks; per-sender order is preserved by the queue.
    let first = {
        let handle = handle.clone();
        tokio::spawn(async move {
            handle
                .dispatch(HubEvent::Join {
                    conn: a,
                    room: "lobby".into(),
                })
                .await
        })
    };
    first.await.unwrap().unwrap();
    handle
        .dispatch(HubEvent::Join {
            conn: b,
            room: "lobby".into(),
        })
        .await
        .unwrap();
    handle.dispatch(HubEvent::Disconnect { conn: a }).await.unwrap();

    // existing-peers x2, peer-joined to A, peer-left to B
    assert!(signaling.wait_for_messages(4, 5000).await);
    assert_eq!(
        signaling.sent_to(&b).await,
        vec![
            ServerMessage::ExistingPeers(vec![a]),
            ServerMessage::PeerLeft(a),
        ]
    );

    // Dropping the last handle stops the loop.
    drop(handle);
    tokio::time::timeout(std::time::Duration::from_secs(5), task)
        .await
        .expect("hub loop did not stop")
        .unwrap();
}
