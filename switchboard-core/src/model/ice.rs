use serde::{Deserialize, Serialize};

/// `urls` may be a single string or a list, as in `RTCIceServer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IceUrls {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IceServerConfig {
    pub urls: IceUrls,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,
}

impl IceServerConfig {
    pub fn stun(urls: Vec<String>) -> Self {
        Self {
            urls: IceUrls::Many(urls),
            username: None,
            credential: None,
        }
    }

    pub fn turn(url: String, username: Option<String>, credential: Option<String>) -> Self {
        Self {
            urls: IceUrls::One(url),
            username,
            credential,
        }
    }
}
