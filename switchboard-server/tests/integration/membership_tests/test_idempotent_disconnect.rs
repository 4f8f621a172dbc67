use switchboard_core::ServerMessage;
use switchboard_server::HubEvent;

use crate::integration::{create_test_hub, init_tracing};

#[tokio::test]
async fn test_idempotent_disconnect() {
    init_tracing();

    let (mut hub, signaling) = create_test_hub();
    let a = signaling.connect().await;
    let b = signaling.connect().await;

    for conn in [a, b] {
        hub.handle(HubEvent::Join {
            conn,
            room: "lobby".into(),
        })
        .await;
    }

    hub.handle(HubEvent::Disconnect { conn: a }).await;
    hub.handle(HubEvent::Disconnect { conn: a }).await;

    let left: Vec<_> = signaling
        .sent_to(&b)
        .await
        .into_iter()
        .filter(|msg| *msg == ServerMessage::PeerLeft(a))
        .collect();
    assert_eq!(left.len(), 1, "peer-left must be broadcast at most once");
    assert_eq!(hub.members("lobby"), vec![b]);
}

#[tokio::test]
async fn test_disconnect_without_join_is_noop() {
    init_tracing();

    let (mut hub, signaling) = create_test_hub();
    let a = signaling.connect().await;

    hub.handle(HubEvent::Disconnect { conn: a }).await;

    assert_eq!(signaling.total_delivered().await, 0);
    assert_eq!(hub.room_count(), 0);
}
