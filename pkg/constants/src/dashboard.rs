//! Dashboard backend constants.

/// Annotation holding the human-readable description of a workload.
pub const DESCRIPTION_ANNOTATION_KEY: &str = "description";

/// Protocol assumed for a service port that does not declare one.
pub const DEFAULT_PORT_PROTOCOL: &str = "TCP";

// ─── Upstream API routes (k3rs API server) ────────────────────────────────

/// Lists every namespace.
pub const NAMESPACES_PATH: &str = "/api/v1/namespaces";

/// Per-namespace collection suffix for replica sets.
pub const REPLICASETS_RESOURCE: &str = "replicasets";

/// Per-namespace collection suffix for services.
pub const SERVICES_RESOURCE: &str = "services";

/// Per-namespace collection suffix for pods.
pub const PODS_RESOURCE: &str = "pods";

// ─── Dashboard routes ─────────────────────────────────────────────────────

/// Replica set list served by the dashboard backend.
pub const REPLICASET_LIST_ROUTE: &str = "/api/v1/replicasets";

/// Liveness probe.
pub const HEALTH_ROUTE: &str = "/healthz";
