use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use switchboard_core::ConnectionId;
use thiserror::Error;

/// Outbound delivery failures. The hub swallows all of them.
#[derive(Error, Debug)]
pub enum SignalingError {
    #[error("connection {0} is not registered")]
    UnknownConnection(ConnectionId),

    #[error("outbound channel of connection {0} is closed")]
    ChannelClosed(ConnectionId),

    #[error("failed to serialize signal message: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum HubError {
    #[error("hub event loop has stopped")]
    Stopped,
}

/// Failures of the ICE credential service. Surfaced to HTTP callers as 503.
#[derive(Error, Debug)]
pub enum IceError {
    #[error("credential service request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("credential service answered with status {0}")]
    UpstreamStatus(reqwest::StatusCode),

    #[error("credential service sent an invalid ICE server list: {0}")]
    InvalidResponse(#[source] reqwest::Error),
}

impl IntoResponse for IceError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::SERVICE_UNAVAILABLE, body).into_response()
    }
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },

    #[error("server terminated: {0}")]
    Serve(#[from] std::io::Error),

    #[error("failed to build ICE credential client: {0}")]
    IceClient(#[source] reqwest::Error),
}
