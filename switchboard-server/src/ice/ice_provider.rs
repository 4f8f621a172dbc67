use crate::config::IceConfig;
use crate::error::{IceError, ServerError};
use switchboard_core::IceServerConfig;
use tracing::{debug, warn};

/// Source of the ICE server list handed to browsers.
#[derive(Debug, Clone)]
pub enum IceServerProvider {
    Static(Vec<IceServerConfig>),
    /// Proxies a third-party credential service on every request.
    Remote { client: reqwest::Client, url: String },
}

impl IceServerProvider {
    pub fn from_config(config: &IceConfig) -> Result<Self, ServerError> {
        if let Some(url) = &config.credentials_url {
            let client = reqwest::Client::builder()
                .timeout(config.request_timeout)
                .build()
                .map_err(ServerError::IceClient)?;

            return Ok(Self::Remote {
                client,
                url: url.clone(),
            });
        }

        let mut servers = Vec::new();
        if !config.stun_urls.is_empty() {
            servers.push(IceServerConfig::stun(config.stun_urls.clone()));
        }
        if let Some(turn_url) = &config.turn_url {
            servers.push(IceServerConfig::turn(
                turn_url.clone(),
                config.turn_username.clone(),
                config.turn_credential.clone(),
            ));
        }

        Ok(Self::Static(servers))
    }

    pub async fn fetch(&self) -> Result<Vec<IceServerConfig>, IceError> {
        match self {
            Self::Static(servers) => Ok(servers.clone()),
            Self::Remote { client, url } => {
                debug!("Fetching ICE servers from credential service");

                let response = client.get(url).send().await.inspect_err(|e| {
                    warn!("Credential service unreachable: {}", e);
                })?;

                let status = response.status();
                if !status.is_success() {
                    warn!("Credential service answered {}", status);
                    return Err(IceError::UpstreamStatus(status));
                }

                response.json::<Vec<IceServerConfig>>().await.map_err(|e| {
                    warn!("Credential service sent an unusable body: {}", e);
                    IceError::InvalidResponse(e)
                })
            }
        }
    }
}
