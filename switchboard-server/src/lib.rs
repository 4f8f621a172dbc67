mod app;
pub mod config;
mod error;
mod hub;
mod ice;
mod signaling;

pub use app::*;
pub use config::{IceConfig, RelayMode, ServerConfig};
pub use error::*;
pub use hub::*;
pub use ice::*;
pub use signaling::*;
