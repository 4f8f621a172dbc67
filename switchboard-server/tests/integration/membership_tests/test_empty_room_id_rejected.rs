use switchboard_server::HubEvent;

use crate::integration::{create_test_hub, init_tracing};

#[tokio::test]
async fn test_empty_room_id_rejected() {
    init_tracing();

    let (mut hub, signaling) = create_test_hub();
    let a = signaling.connect().await;

    hub.handle(HubEvent::Join {
        conn: a,
        room: String::new(),
    })
    .await;

    assert_eq!(hub.room_count(), 0);
    assert!(hub.room_of(&a).is_none());
    assert_eq!(signaling.total_delivered().await, 0);
}

#[tokio::test]
async fn test_empty_join_keeps_existing_membership() {
    init_tracing();

    let (mut hub, signaling) = create_test_hub();
    let a = signaling.connect().await;

    hub.handle(HubEvent::Join {
        conn: a,
        room: "lobby".into(),
    })
    .await;
    hub.handle(HubEvent::Join {
        conn: a,
        room: String::new(),
    })
    .await;

    assert_eq!(hub.room_of(&a).map(|r| r.as_str()), Some("lobby"));
    assert_eq!(hub.members("lobby"), vec![a]);
}
