use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_STUN_URL: &str = "stun:stun.l.google.com:19302";

/// Which targeted relays the hub lets through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RelayMode {
    /// Any connection may address any other connection.
    #[default]
    Open,
    /// Sender and target must currently share a room.
    SameRoom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IceConfig {
    /// Third-party endpoint returning a JSON array of ICE servers. Takes
    /// precedence over the static list below when set.
    pub credentials_url: Option<String>,
    pub request_timeout: Duration,
    pub stun_urls: Vec<String>,
    pub turn_url: Option<String>,
    pub turn_username: Option<String>,
    pub turn_credential: Option<String>,
}

impl Default for IceConfig {
    fn default() -> Self {
        Self {
            credentials_url: None,
            request_timeout: Duration::from_secs(5),
            stun_urls: vec![DEFAULT_STUN_URL.to_string()],
            turn_url: None,
            turn_username: None,
            turn_credential: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub hub_queue_capacity: usize,
    pub relay_mode: RelayMode,
    /// Allow any origin, method and header.
    pub permissive_cors: bool,
    pub ice: IceConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
            hub_queue_capacity: 1024,
            relay_mode: RelayMode::default(),
            permissive_cors: true,
            ice: IceConfig::default(),
        }
    }
}
