//! Filesystem path constants.

/// Default config file path for the dashboard backend.
pub const DEFAULT_DASHBOARD_CONFIG: &str = "/etc/k3rs/dashboard.yaml";
