use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Server-assigned identifier of one live client connection.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[serde(transparent)]
pub struct ConnectionId(pub Uuid);

impl ConnectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a client-supplied target. Only the lowercase hyphenated form the
    /// server hands out in `welcome` is accepted.
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s)
            .ok()
            .filter(|id| id.hyphenated().to_string() == s)
            .map(Self)
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ConnectionId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
