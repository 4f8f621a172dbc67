mod connection;
mod ice;
mod room;
mod signaling;

pub use connection::ConnectionId;
pub use ice::{IceServerConfig, IceUrls};
pub use room::RoomId;
pub use signaling::{ClientMessage, ServerMessage};
