use crate::hub::hub_event::HubEvent;
use crate::hub::relay_policy::{OpenRelay, RelayKind, RelayPolicy, RelayRequest};
use crate::signaling::SignalingOutput;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use switchboard_core::{ConnectionId, RoomId, ServerMessage};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Room membership and targeted relay.
///
/// Owned by a single task (see [`Hub::run`]); every event is applied to
/// completion before the next one is looked at, so joins and disconnects are
/// linearizable without locks.
pub struct Hub {
    rooms: HashMap<RoomId, HashSet<ConnectionId>>,
    membership: HashMap<ConnectionId, RoomId>,
    output: Arc<dyn SignalingOutput>,
    policy: Arc<dyn RelayPolicy>,
}

impl Hub {
    pub fn new(output: Arc<dyn SignalingOutput>) -> Self {
        Self::with_policy(output, Arc::new(OpenRelay))
    }

    pub fn with_policy(output: Arc<dyn SignalingOutput>, policy: Arc<dyn RelayPolicy>) -> Self {
        Self {
            rooms: HashMap::new(),
            membership: HashMap::new(),
            output,
            policy,
        }
    }

    pub async fn run(mut self, mut event_rx: mpsc::Receiver<HubEvent>) {
        info!("Hub event loop started");

        while let Some(event) = event_rx.recv().await {
            self.handle(event).await;
        }

        info!(
            rooms = self.rooms.len(),
            connections = self.membership.len(),
            "Hub event loop finished"
        );
    }

    pub async fn handle(&mut self, event: HubEvent) {
        match event {
            HubEvent::Join { conn, room } => self.on_join(conn, room).await,
            HubEvent::Offer { conn, target, sdp } => {
                let msg = ServerMessage::Offer { sdp, caller: conn };
                self.relay(RelayKind::Offer, conn, &target, msg).await;
            }
            HubEvent::Answer { conn, target, sdp } => {
                let msg = ServerMessage::Answer { sdp, callee: conn };
                self.relay(RelayKind::Answer, conn, &target, msg).await;
            }
            HubEvent::IceCandidate {
                conn,
                target,
                candidate,
            } => {
                let msg = ServerMessage::IceCandidate {
                    candidate,
                    sender: conn,
                };
                self.relay(RelayKind::IceCandidate, conn, &target, msg).await;
            }
            HubEvent::Disconnect { conn } => self.on_disconnect(conn).await,
        }

        debug_assert!(self.is_consistent(), "room table and membership diverged");
    }

    async fn on_join(&mut self, conn: ConnectionId, room: String) {
        let Some(room_id) = RoomId::parse(room) else {
            warn!("Rejected join with empty room id from {}", conn);
            return;
        };

        match self.membership.get(&conn).cloned() {
            Some(current) if current == room_id => {
                debug!("{} re-joined room '{}'", conn, room_id);
                let peers = self.peers_of(&room_id, &conn);
                self.send(&conn, ServerMessage::ExistingPeers(peers)).await;
                return;
            }
            Some(_) => self.on_disconnect(conn).await,
            None => {}
        }

        let members = self.rooms.entry(room_id.clone()).or_default();
        if members.is_empty() {
            info!("Creating room '{}'", room_id);
        }
        members.insert(conn);
        self.membership.insert(conn, room_id.clone());

        let peers = self.peers_of(&room_id, &conn);
        info!("{} joined room '{}' ({} peers)", conn, room_id, peers.len());

        self.send(&conn, ServerMessage::ExistingPeers(peers.clone())).await;
        self.broadcast(&peers, ServerMessage::PeerJoined(conn)).await;
    }

    async fn on_disconnect(&mut self, conn: ConnectionId) {
        let Some(room_id) = self.membership.remove(&conn) else {
            debug!("Disconnect for {} without room membership", conn);
            return;
        };

        let remaining: Vec<ConnectionId> = match self.rooms.get_mut(&room_id) {
            Some(members) => {
                members.remove(&conn);
                members.iter().copied().collect()
            }
            None => Vec::new(),
        };

        if remaining.is_empty() {
            self.rooms.remove(&room_id);
            info!("Room '{}' is empty, removed", room_id);
        }

        info!("{} left room '{}'", conn, room_id);
        self.broadcast(&remaining, ServerMessage::PeerLeft(conn)).await;
    }

    async fn relay(&self, kind: RelayKind, sender: ConnectionId, target: &str, msg: ServerMessage) {
        let Some(target) = ConnectionId::parse(target) else {
            debug!("Dropping {:?} from {}: malformed target {:?}", kind, sender, target);
            return;
        };

        let request = RelayRequest {
            kind,
            sender,
            sender_room: self.membership.get(&sender),
            target,
            target_room: self.membership.get(&target),
        };
        if !self.policy.allow(&request) {
            debug!("Relay policy refused {:?} from {} to {}", kind, sender, target);
            return;
        }

        debug!("Relaying {:?} from {} to {}", kind, sender, target);
        self.send(&target, msg).await;
    }

    async fn broadcast(&self, recipients: &[ConnectionId], msg: ServerMessage) {
        for conn in recipients {
            self.send(conn, msg.clone()).await;
        }
    }

    async fn send(&self, conn: &ConnectionId, msg: ServerMessage) {
        let event = msg.event_name();
        if let Err(e) = self.output.send(conn, msg).await {
            debug!("Undelivered '{}' for {}: {}", event, conn, e);
        }
    }

    fn peers_of(&self, room_id: &RoomId, conn: &ConnectionId) -> Vec<ConnectionId> {
        self.rooms
            .get(room_id)
            .map(|members| members.iter().filter(|id| *id != conn).copied().collect())
            .unwrap_or_default()
    }

    /// Current members of `room`, in no particular order.
    pub fn members(&self, room: &str) -> Vec<ConnectionId> {
        self.rooms
            .get(room)
            .map(|members| members.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn room_of(&self, conn: &ConnectionId) -> Option<&RoomId> {
        self.membership.get(conn)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Every room member maps back to its room, every membership entry is
    /// present in its room, and no room is empty.
    pub fn is_consistent(&self) -> bool {
        let forward = self.rooms.iter().all(|(room_id, members)| {
            !members.is_empty()
                && members
                    .iter()
                    .all(|conn| self.membership.get(conn) == Some(room_id))
        });
        let backward = self.membership.iter().all(|(conn, room_id)| {
            self.rooms
                .get(room_id)
                .is_some_and(|members| members.contains(conn))
        });

        forward && backward
    }
}
