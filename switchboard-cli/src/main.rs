use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use switchboard::server::{self, IceConfig, RelayMode, ServerConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "switchboard", version, about = "WebRTC signaling relay")]
struct Cli {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,

    #[arg(long, value_enum, env = "RELAY_MODE", default_value_t = RelayArg::Open)]
    relay: RelayArg,

    #[arg(long, env = "HUB_QUEUE_CAPACITY", default_value_t = 1024)]
    hub_queue_capacity: usize,

    /// Disable the allow-all CORS layer.
    #[arg(long)]
    no_cors: bool,

    /// Third-party endpoint returning ICE servers with fresh TURN credentials.
    #[arg(long, env = "ICE_CREDENTIALS_URL")]
    ice_credentials_url: Option<String>,

    #[arg(long, env = "ICE_TIMEOUT_SECS", default_value_t = 5)]
    ice_timeout_secs: u64,

    #[arg(
        long = "stun-url",
        env = "STUN_URLS",
        value_delimiter = ',',
        default_value = "stun:stun.l.google.com:19302"
    )]
    stun_urls: Vec<String>,

    #[arg(long, env = "TURN_URL")]
    turn_url: Option<String>,

    #[arg(long, env = "TURN_USERNAME")]
    turn_username: Option<String>,

    #[arg(long, env = "TURN_CREDENTIAL", hide_env_values = true)]
    turn_credential: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RelayArg {
    /// Relay to any connected client.
    Open,
    /// Relay only between members of the same room.
    SameRoom,
}

impl From<RelayArg> for RelayMode {
    fn from(arg: RelayArg) -> Self {
        match arg {
            RelayArg::Open => RelayMode::Open,
            RelayArg::SameRoom => RelayMode::SameRoom,
        }
    }
}

impl Cli {
    fn into_config(self) -> ServerConfig {
        ServerConfig {
            bind: SocketAddr::new(self.host, self.port),
            hub_queue_capacity: self.hub_queue_capacity,
            relay_mode: self.relay.into(),
            permissive_cors: !self.no_cors,
            ice: IceConfig {
                credentials_url: self.ice_credentials_url,
                request_timeout: Duration::from_secs(self.ice_timeout_secs),
                stun_urls: self.stun_urls,
                turn_url: self.turn_url,
                turn_username: self.turn_username,
                turn_credential: self.turn_credential,
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&cli.log_level).context("Invalid log level")?,
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = cli.into_config();
    info!("Initializing signaling relay ({:?} relay)", config.relay_mode);

    server::serve(config, shutdown_signal())
        .await
        .context("Signaling server failed")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
