use serde_json::json;
use switchboard_core::{ClientMessage, ServerMessage};
use switchboard_server::ServerConfig;

use crate::integration::init_tracing;
use crate::utils::{TestClient, spawn_server};

#[tokio::test]
async fn test_websocket_scenario() {
    init_tracing();

    let addr = spawn_server(ServerConfig::default())
        .await
        .expect("Failed to start server");

    let mut a = TestClient::connect(addr).await.expect("A failed to connect");
    let mut b = TestClient::connect(addr).await.expect("B failed to connect");
    assert_ne!(a.id, b.id);

    assert!(a.join("lobby").await.unwrap().is_empty());
    assert_eq!(b.join("lobby").await.unwrap(), vec![a.id]);
    assert_eq!(a.recv().await.unwrap(), ServerMessage::PeerJoined(b.id));

    let offer = json!({ "type": "offer", "sdp": "v=0..." });
    a.send(&ClientMessage::Offer {
        sdp: offer.clone(),
        target: b.id.to_string(),
    })
    .await
    .unwrap();
    assert_eq!(
        b.recv().await.unwrap(),
        ServerMessage::Offer {
            sdp: offer,
            caller: a.id,
        }
    );

    let answer = json!({ "type": "answer", "sdp": "v=0..." });
    b.send(&ClientMessage::Answer {
        sdp: answer.clone(),
        target: a.id.to_string(),
    })
    .await
    .unwrap();
    assert_eq!(
        a.recv().await.unwrap(),
        ServerMessage::Answer {
            sdp: answer,
            callee: b.id,
        }
    );

    let candidate = json!({ "candidate": "candidate:1 1 udp 1 10.0.0.1 5000 typ host" });
    a.send(&ClientMessage::IceCandidate {
        candidate: candidate.clone(),
        target: b.id.to_string(),
    })
    .await
    .unwrap();
    assert_eq!(
        b.recv().await.unwrap(),
        ServerMessage::IceCandidate {
            candidate,
            sender: a.id,
        }
    );

    let a_id = a.id;
    a.close().await.unwrap();
    assert_eq!(b.recv().await.unwrap(), ServerMessage::PeerLeft(a_id));

    b.close().await.unwrap();
}

#[tokio::test]
async fn test_relay_to_absent_peer_is_silent() {
    init_tracing();

    let addr = spawn_server(ServerConfig::default())
        .await
        .expect("Failed to start server");
    let mut a = TestClient::connect(addr).await.unwrap();
    a.join("lobby").await.unwrap();

    a.send_raw(r#"{"event":"offer","data":{"sdp":{},"target":"00000000-0000-0000-0000-000000000000"}}"#)
        .await
        .unwrap();

    assert!(a.is_quiet().await, "sender must not hear about the miss");
    a.close().await.unwrap();
}
