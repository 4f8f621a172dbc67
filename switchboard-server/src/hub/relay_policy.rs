use crate::config::RelayMode;
use std::sync::Arc;
use switchboard_core::{ConnectionId, RoomId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayKind {
    Offer,
    Answer,
    IceCandidate,
}

/// What the hub knows about a targeted relay before delivering it.
#[derive(Debug, Clone, Copy)]
pub struct RelayRequest<'a> {
    pub kind: RelayKind,
    pub sender: ConnectionId,
    pub sender_room: Option<&'a RoomId>,
    pub target: ConnectionId,
    pub target_room: Option<&'a RoomId>,
}

/// Decides whether a targeted relay is delivered. A refusal is a silent drop,
/// indistinguishable for the sender from an absent target.
pub trait RelayPolicy: Send + Sync + 'static {
    fn allow(&self, request: &RelayRequest<'_>) -> bool;
}

/// Blind relay: every target is reachable.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenRelay;

impl RelayPolicy for OpenRelay {
    fn allow(&self, _request: &RelayRequest<'_>) -> bool {
        true
    }
}

/// Only relays between members of the same room.
#[derive(Debug, Default, Clone, Copy)]
pub struct SameRoomRelay;

impl RelayPolicy for SameRoomRelay {
    fn allow(&self, request: &RelayRequest<'_>) -> bool {
        match (request.sender_room, request.target_room) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

pub fn policy_for(mode: RelayMode) -> Arc<dyn RelayPolicy> {
    match mode {
        RelayMode::Open => Arc::new(OpenRelay),
        RelayMode::SameRoom => Arc::new(SameRoomRelay),
    }
}
