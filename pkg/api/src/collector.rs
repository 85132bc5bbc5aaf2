use anyhow::{Context, bail};
use async_trait::async_trait;
use pkg_constants::dashboard::NAMESPACES_PATH;
use pkg_types::config::UpstreamResources;
use pkg_types::pod::Pod;
use pkg_types::replicaset::ReplicaSet;
use pkg_types::service::Service;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Source of the cluster collections the replica set view is built from.
///
/// Namespaces are listed once per request and the same list is handed to
/// every collection call, so all three collections cover the same
/// namespaces. Errors are returned to the caller as-is; nothing is retried.
#[async_trait]
pub trait Collector: Send + Sync {
    async fn list_namespaces(&self) -> anyhow::Result<Vec<String>>;
    async fn list_replica_sets(&self, namespaces: &[String]) -> anyhow::Result<Vec<ReplicaSet>>;
    async fn list_services(&self, namespaces: &[String]) -> anyhow::Result<Vec<Service>>;
    async fn list_pods(&self, namespaces: &[String]) -> anyhow::Result<Vec<Pod>>;
}

#[derive(Debug, Deserialize)]
struct NamespaceEntry {
    name: String,
}

/// Collector backed by the k3rs API server.
///
/// The API server only exposes namespaced collections, so each list call
/// walks the given namespaces and concatenates the per-namespace results.
pub struct ApiCollector {
    client: reqwest::Client,
    server: String,
    token: Option<String>,
    resources: UpstreamResources,
}

impl ApiCollector {
    pub fn new(
        server: &str,
        token: Option<String>,
        resources: UpstreamResources,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            server: server.trim_end_matches('/').to_string(),
            token,
            resources,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let url = format!("{}{}", self.server, path);
        let mut req = self.client.get(&url);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let resp = req
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?;
        let status = resp.status();
        if !status.is_success() {
            bail!("GET {} returned {}", url, status);
        }
        resp.json()
            .await
            .with_context(|| format!("Malformed response from {}", url))
    }

    async fn list_all<T: DeserializeOwned>(
        &self,
        namespaces: &[String],
        resource: &str,
    ) -> anyhow::Result<Vec<T>> {
        let mut items = Vec::new();
        for ns in namespaces {
            let path = namespaced_path(ns, resource);
            let mut batch: Vec<T> = self.get_json(&path).await?;
            debug!("Listed {} {} in {}", batch.len(), resource, ns);
            items.append(&mut batch);
        }
        Ok(items)
    }
}

fn namespaced_path(ns: &str, resource: &str) -> String {
    format!("{}/{}/{}", NAMESPACES_PATH, ns, resource)
}

#[async_trait]
impl Collector for ApiCollector {
    async fn list_namespaces(&self) -> anyhow::Result<Vec<String>> {
        let entries: Vec<NamespaceEntry> = self.get_json(NAMESPACES_PATH).await?;
        debug!("Listed {} namespace(s)", entries.len());
        Ok(entries.into_iter().map(|ns| ns.name).collect())
    }

    async fn list_replica_sets(&self, namespaces: &[String]) -> anyhow::Result<Vec<ReplicaSet>> {
        self.list_all(namespaces, &self.resources.replicasets).await
    }

    async fn list_services(&self, namespaces: &[String]) -> anyhow::Result<Vec<Service>> {
        self.list_all(namespaces, &self.resources.services).await
    }

    async fn list_pods(&self, namespaces: &[String]) -> anyhow::Result<Vec<Pod>> {
        self.list_all(namespaces, &self.resources.pods).await
    }
}
