use serde_json::json;
use std::sync::Arc;
use switchboard_core::ServerMessage;
use switchboard_server::{HubEvent, SameRoomRelay};

use crate::integration::{create_test_hub_with, init_tracing};

#[tokio::test]
async fn test_same_room_policy() {
    init_tracing();

    let (mut hub, signaling) = create_test_hub_with(Arc::new(SameRoomRelay));
    let a = signaling.connect().await;
    let b = signaling.connect().await;
    let outsider = signaling.connect().await;

    for conn in [a, b] {
        hub.handle(HubEvent::Join {
            conn,
            room: "lobby".into(),
        })
        .await;
    }
    hub.handle(HubEvent::Join {
        conn: outsider,
        room: "elsewhere".into(),
    })
    .await;
    signaling.clear().await;

    hub.handle(HubEvent::Offer {
        conn: outsider,
        target: a.to_string(),
        sdp: json!({ "type": "offer" }),
    })
    .await;
    assert!(signaling.sent_to(&a).await.is_empty());

    hub.handle(HubEvent::Offer {
        conn: b,
        target: a.to_string(),
        sdp: json!({ "type": "offer" }),
    })
    .await;
    assert_eq!(
        signaling.sent_to(&a).await,
        vec![ServerMessage::Offer {
            sdp: json!({ "type": "offer" }),
            caller: b,
        }]
    );

    // The refused sender hears nothing either.
    assert!(signaling.sent_to(&outsider).await.is_empty());
}
