use axum::{Router, middleware, routing::get};
use pkg_constants::dashboard::{HEALTH_ROUTE, REPLICASET_LIST_ROUTE};
use pkg_types::config::UpstreamResources;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::AppState;
use crate::collector::ApiCollector;
use crate::handlers::{health, replicasets};
use crate::request_id::request_id_middleware;

/// Server configuration passed from the binary's CLI.
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// k3rs API server the collector lists resources from.
    pub api_server: String,
    pub token: Option<String>,
    /// Collection names listed under `/api/v1/namespaces/{ns}/`.
    pub resources: UpstreamResources,
}

/// Build the dashboard router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(REPLICASET_LIST_ROUTE, get(replicasets::list_replica_sets))
        .route(HEALTH_ROUTE, get(health::healthz))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    let collector = ApiCollector::new(&config.api_server, config.token, config.resources)?;

    let state = AppState {
        collector: Arc::new(collector),
    };

    let app = router(state);

    info!(
        "Starting dashboard backend on {} (upstream {})",
        config.addr, config.api_server
    );
    let listener = TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
