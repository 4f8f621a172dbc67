use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

/// Client-chosen room name. Opaque apart from being non-empty.
#[derive(Debug, Serialize, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    /// Returns `None` for an empty name; no room is ever created for it.
    pub fn parse(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            None
        } else {
            Some(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RoomId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
