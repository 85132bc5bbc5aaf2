use chrono::{DateTime, Utc};
use pkg_constants::dashboard::DESCRIPTION_ANNOTATION_KEY;
use pkg_types::pod::Pod;
use pkg_types::replicaset::ReplicaSet;
use pkg_types::service::Service;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::endpoint::{Endpoint, service_endpoints};
use crate::matcher::matching_services;
use crate::pod_info::{PodInfo, pod_info};

/// Replica sets in the cluster, in the order they were listed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicaSetList {
    pub replica_sets: Vec<ReplicaSetRecord>,
}

/// A replica set plus the services that target it and a summary of its pods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicaSetRecord {
    pub name: String,
    pub namespace: String,
    pub description: String,
    pub labels: HashMap<String, String>,
    pub pods: PodInfo,
    /// One image per container in the pod template, duplicates kept.
    pub container_images: Vec<String>,
    pub creation_time: DateTime<Utc>,
    pub internal_endpoints: Vec<Endpoint>,
    pub external_endpoints: Vec<Endpoint>,
}

/// Join replica sets with the services and pods that belong to them.
pub fn build_replica_set_list(
    replica_sets: &[ReplicaSet],
    services: &[Service],
    pods: &[Pod],
) -> ReplicaSetList {
    let replica_sets = replica_sets
        .iter()
        .map(|rs| build_record(rs, services, pods))
        .collect();
    ReplicaSetList { replica_sets }
}

fn build_record(rs: &ReplicaSet, services: &[Service], pods: &[Pod]) -> ReplicaSetRecord {
    let container_images = rs
        .spec
        .template
        .containers
        .iter()
        .map(|c| c.image.clone())
        .collect();

    let services = matching_services(services, rs);
    let (internal_endpoints, external_endpoints) = service_endpoints(&services);
    let pods = pod_info(rs, pods);

    debug!(
        "RS {}/{}: {} service(s), pods running={} waiting={} failed={}",
        rs.namespace,
        rs.name,
        services.len(),
        pods.running,
        pods.waiting,
        pods.failed
    );

    ReplicaSetRecord {
        name: rs.name.clone(),
        namespace: rs.namespace.clone(),
        description: rs
            .annotations
            .get(DESCRIPTION_ANNOTATION_KEY)
            .cloned()
            .unwrap_or_default(),
        labels: rs.labels.clone(),
        pods,
        container_images,
        creation_time: rs.created_at,
        internal_endpoints,
        external_endpoints,
    }
}
