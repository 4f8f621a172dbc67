
pub use mock_signaling::*;
pub use test_client::*;
