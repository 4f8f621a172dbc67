use crate::model::connection::ConnectionId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Frames a browser sends to the relay.
///
/// `target` stays a raw string: an id that does not parse is a silent miss,
/// not a rejected frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientMessage {
    Join(String),
    Offer {
        #[serde(default)]
        sdp: Value,
        #[serde(default)]
        target: String,
    },
    Answer {
        #[serde(default)]
        sdp: Value,
        #[serde(default)]
        target: String,
    },
    IceCandidate {
        #[serde(default)]
        candidate: Value,
        #[serde(default)]
        target: String,
    },
}

/// Frames the relay sends to a browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerMessage {
    Welcome { id: ConnectionId },
    ExistingPeers(Vec<ConnectionId>),
    PeerJoined(ConnectionId),
    PeerLeft(ConnectionId),
    Offer { sdp: Value, caller: ConnectionId },
    Answer { sdp: Value, callee: ConnectionId },
    IceCandidate { candidate: Value, sender: ConnectionId },
}

impl ServerMessage {
    pub fn event_name(&self) -> &'static str {
        match self {
            ServerMessage::Welcome { .. } => "welcome",
            ServerMessage::ExistingPeers(_) => "existing-peers",
            ServerMessage::PeerJoined(_) => "peer-joined",
            ServerMessage::PeerLeft(_) => "peer-left",
            ServerMessage::Offer { .. } => "offer",
            ServerMessage::Answer { .. } => "answer",
            ServerMessage::IceCandidate { .. } => "ice-candidate",
        }
    }
}
