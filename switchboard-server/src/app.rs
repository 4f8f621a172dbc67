use crate::config::ServerConfig;
use crate::error::{IceError, ServerError};
use crate::hub::{Hub, HubHandle, policy_for};
use crate::ice::IceServerProvider;
use crate::signaling::{SignalingService, ws_handler};
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use std::future::Future;
use std::sync::Arc;
use switchboard_core::IceServerConfig;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub struct AppState {
    pub signaling: SignalingService,
    pub hub: HubHandle,
    pub ice: IceServerProvider,
}

/// Wires the hub to the connection registry and returns the HTTP surface.
///
/// Spawns the hub task, so it must run inside a Tokio runtime. The hub stops
/// once the router and every connection holding its handle are gone.
pub fn build_router(config: &ServerConfig) -> Result<Router, ServerError> {
    let signaling = SignalingService::new();
    let hub = Hub::with_policy(Arc::new(signaling.clone()), policy_for(config.relay_mode));
    let (hub, _hub_task) = HubHandle::spawn(hub, config.hub_queue_capacity);
    let ice = IceServerProvider::from_config(&config.ice)?;

    let state = Arc::new(AppState {
        signaling,
        hub,
        ice,
    });

    Ok(router(state, config.permissive_cors))
}

pub fn router(state: Arc<AppState>, permissive_cors: bool) -> Router {
    let router = Router::new()
        .route("/ws", get(ws_handler))
        .route("/ice-servers", get(ice_servers))
        .route("/health", get(health))
        .with_state(state);

    if permissive_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router.layer(cors)
    } else {
        router
    }
}

async fn ice_servers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<IceServerConfig>>, IceError> {
    state.ice.fetch().await.map(Json)
}

async fn health() -> &'static str {
    "OK"
}

/// Binds `config.bind` and serves until `shutdown` resolves.
pub async fn serve<F>(config: ServerConfig, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(&config)?;

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind,
            source,
        })?;
    info!("Signaling server listening on http://{}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Signaling server stopped");
    Ok(())
}
