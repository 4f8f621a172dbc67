use serde_json::Value;
use switchboard_core::{ClientMessage, ConnectionId};

/// Everything the hub reacts to. Produced by the transport layer.
#[derive(Debug, Clone, PartialEq)]
pub enum HubEvent {
    /// The connection asked to enter `room` (raw, still unvalidated).
    Join { conn: ConnectionId, room: String },

    Offer {
        conn: ConnectionId,
        target: String,
        sdp: Value,
    },

    Answer {
        conn: ConnectionId,
        target: String,
        sdp: Value,
    },

    IceCandidate {
        conn: ConnectionId,
        target: String,
        candidate: Value,
    },

    /// The transport lost the connection.
    Disconnect { conn: ConnectionId },
}

impl HubEvent {
    pub fn from_client(conn: ConnectionId, msg: ClientMessage) -> Self {
        match msg {
            ClientMessage::Join(room) => HubEvent::Join { conn, room },
            ClientMessage::Offer { sdp, target } => HubEvent::Offer { conn, target, sdp },
            ClientMessage::Answer { sdp, target } => HubEvent::Answer { conn, target, sdp },
            ClientMessage::IceCandidate { candidate, target } => HubEvent::IceCandidate {
                conn,
                target,
                candidate,
            },
        }
    }

    pub fn conn(&self) -> ConnectionId {
        match self {
            HubEvent::Join { conn, .. }
            | HubEvent::Offer { conn, .. }
            | HubEvent::Answer { conn, .. }
            | HubEvent::IceCandidate { conn, .. }
            | HubEvent::Disconnect { conn } => *conn,
        }
    }
}
