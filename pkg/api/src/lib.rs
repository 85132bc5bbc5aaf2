pub mod collector;
pub mod handlers;
pub mod request_id;
pub mod server;

use std::sync::Arc;

use collector::Collector;

/// Shared application state injected into all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub collector: Arc<dyn Collector>,
}
