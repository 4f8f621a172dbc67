mod hub;
mod hub_event;
mod hub_handle;
mod relay_policy;

pub use hub::*;
pub use hub_event::*;
pub use hub_handle::*;
pub use relay_policy::*;
