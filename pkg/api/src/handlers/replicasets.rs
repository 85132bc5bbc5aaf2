use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use pkg_dashboard::{ReplicaSetList, build_replica_set_list};
use tracing::{info, warn};

use crate::AppState;
use crate::collector::Collector;

/// Fetch replica sets, services and pods from `collector` and join them.
///
/// Namespaces are enumerated once and shared by all three listings. The
/// first failing list call aborts the whole request; no partial list is
/// ever returned.
pub async fn get_replica_set_list(collector: &dyn Collector) -> anyhow::Result<ReplicaSetList> {
    info!("Getting list of all replica sets in the cluster");

    let namespaces = collector.list_namespaces().await?;
    let replica_sets = collector.list_replica_sets(&namespaces).await?;
    let services = collector.list_services(&namespaces).await?;
    let pods = collector.list_pods(&namespaces).await?;

    let list = build_replica_set_list(&replica_sets, &services, &pods);
    info!(
        "Built {} replica set record(s) from {} service(s) and {} pod(s)",
        list.replica_sets.len(),
        services.len(),
        pods.len()
    );
    Ok(list)
}

/// GET /api/v1/replicasets — replica sets with their endpoints and pod counts.
pub async fn list_replica_sets(State(state): State<AppState>) -> impl IntoResponse {
    match get_replica_set_list(state.collector.as_ref()).await {
        Ok(list) => (StatusCode::OK, Json(list)).into_response(),
        Err(e) => {
            warn!("Failed to list replica sets: {:#}", e);
            (StatusCode::BAD_GATEWAY, format!("{:#}", e)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use pkg_types::pod::{Pod, PodPhase, PodSpec};
    use pkg_types::replicaset::{ReplicaSet, ReplicaSetSpec, ReplicaSetStatus};
    use pkg_types::service::{Service, ServicePort, ServiceSpec};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn app_labels() -> HashMap<String, String> {
        HashMap::from([("app".to_string(), "web".to_string())])
    }

    fn make_replica_set() -> ReplicaSet {
        ReplicaSet {
            name: "web".to_string(),
            namespace: "default".to_string(),
            labels: app_labels(),
            annotations: HashMap::new(),
            spec: ReplicaSetSpec {
                replicas: 2,
                selector: app_labels(),
                template: PodSpec::default(),
            },
            status: ReplicaSetStatus { replicas: 2 },
            created_at: Utc::now(),
        }
    }

    fn make_service() -> Service {
        Service {
            name: "web".to_string(),
            namespace: "default".to_string(),
            spec: ServiceSpec {
                selector: app_labels(),
                ports: vec![ServicePort {
                    port: 8080,
                    protocol: "TCP".to_string(),
                }],
            },
            status: Default::default(),
            created_at: Utc::now(),
        }
    }

    fn make_pod(phase: PodPhase) -> Pod {
        Pod {
            name: "web-1".to_string(),
            namespace: "default".to_string(),
            labels: app_labels(),
            phase,
            created_at: Utc::now(),
        }
    }

    /// Serves fixed collections; optionally fails the service listing.
    struct StaticCollector {
        fail_services: bool,
        calls: AtomicUsize,
        namespace_lists: AtomicUsize,
        /// Namespaces handed to each collection call.
        seen_namespaces: Mutex<Vec<Vec<String>>>,
    }

    impl StaticCollector {
        fn new(fail_services: bool) -> Self {
            Self {
                fail_services,
                calls: AtomicUsize::new(0),
                namespace_lists: AtomicUsize::new(0),
                seen_namespaces: Mutex::new(Vec::new()),
            }
        }

        fn record(&self, namespaces: &[String]) {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen_namespaces
                .lock()
                .unwrap()
                .push(namespaces.to_vec());
        }
    }

    #[async_trait]
    impl Collector for StaticCollector {
        async fn list_namespaces(&self) -> anyhow::Result<Vec<String>> {
            self.namespace_lists.fetch_add(1, Ordering::SeqCst);
            Ok(vec!["default".to_string(), "web".to_string()])
        }

        async fn list_replica_sets(&self, namespaces: &[String]) -> anyhow::Result<Vec<ReplicaSet>> {
            self.record(namespaces);
            Ok(vec![make_replica_set()])
        }

        async fn list_services(&self, namespaces: &[String]) -> anyhow::Result<Vec<Service>> {
            self.record(namespaces);
            if self.fail_services {
                anyhow::bail!("services: 403 Forbidden");
            }
            Ok(vec![make_service()])
        }

        async fn list_pods(&self, namespaces: &[String]) -> anyhow::Result<Vec<Pod>> {
            self.record(namespaces);
            Ok(vec![make_pod(PodPhase::Running), make_pod(PodPhase::Failed)])
        }
    }

    fn make_state(collector: StaticCollector) -> AppState {
        AppState {
            collector: Arc::new(collector),
        }
    }

    #[tokio::test]
    async fn joins_collected_resources() {
        let collector = StaticCollector::new(false);
        let list = get_replica_set_list(&collector).await.unwrap();

        assert_eq!(collector.calls.load(Ordering::SeqCst), 3);
        assert_eq!(list.replica_sets.len(), 1);
        let record = &list.replica_sets[0];
        assert_eq!(record.pods.running, 1);
        assert_eq!(record.pods.failed, 1);
        assert_eq!(record.internal_endpoints.len(), 1);
        assert_eq!(record.internal_endpoints[0].ports[0].port, 8080);
    }

    #[tokio::test]
    async fn namespaces_are_listed_once_and_shared() {
        let collector = StaticCollector::new(false);
        get_replica_set_list(&collector).await.unwrap();

        assert_eq!(collector.namespace_lists.load(Ordering::SeqCst), 1);
        let seen = collector.seen_namespaces.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert!(seen.iter().all(|ns| ns == &["default", "web"]));
    }

    #[tokio::test]
    async fn collector_error_is_propagated() {
        let collector = StaticCollector::new(true);
        let err = get_replica_set_list(&collector).await.unwrap_err();

        assert!(err.to_string().contains("403 Forbidden"));
        // Pods are never listed once services fail.
        assert_eq!(collector.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn handler_returns_json_list() {
        let state = make_state(StaticCollector::new(false));
        let resp = list_replica_sets(State(state)).await.into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let list: ReplicaSetList = serde_json::from_slice(&body).unwrap();
        assert_eq!(list.replica_sets[0].name, "web");
    }

    #[tokio::test]
    async fn handler_maps_collector_error_to_bad_gateway() {
        let state = make_state(StaticCollector::new(true));
        let resp = list_replica_sets(State(state)).await.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }
}
