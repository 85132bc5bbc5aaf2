//! Network-related constants.

/// Default port for the dashboard backend.
pub const DEFAULT_DASHBOARD_PORT: u16 = 9090;

/// Default k3rs API server address (HTTP) the collector lists resources from.
pub const DEFAULT_API_ADDR: &str = "http://127.0.0.1:6443";

/// Header carrying the per-request id on every dashboard response.
pub const REQUEST_ID_HEADER: &str = "x-request-id";
