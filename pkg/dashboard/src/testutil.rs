//! Fixture builders shared by the unit tests.

use chrono::{TimeZone, Utc};
use pkg_types::pod::{ContainerSpec, Pod, PodPhase, PodSpec};
use pkg_types::replicaset::{ReplicaSet, ReplicaSetSpec, ReplicaSetStatus};
use pkg_types::service::{LoadBalancerIngress, Service, ServicePort, ServiceSpec};
use std::collections::HashMap;

pub fn labels(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn make_replica_set(name: &str, ns: &str, selector: &[(&str, &str)]) -> ReplicaSet {
    ReplicaSet {
        name: name.to_string(),
        namespace: ns.to_string(),
        labels: labels(selector),
        annotations: HashMap::new(),
        spec: ReplicaSetSpec {
            replicas: 3,
            selector: labels(selector),
            template: PodSpec {
                containers: vec![ContainerSpec {
                    name: "app".to_string(),
                    image: "nginx:latest".to_string(),
                }],
            },
        },
        status: ReplicaSetStatus { replicas: 2 },
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn make_service(name: &str, ns: &str, selector: &[(&str, &str)]) -> Service {
    Service {
        name: name.to_string(),
        namespace: ns.to_string(),
        spec: ServiceSpec {
            selector: labels(selector),
            ports: vec![ServicePort {
                port: 80,
                protocol: "TCP".to_string(),
            }],
        },
        status: Default::default(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn with_ingress(mut svc: Service, ips: &[&str]) -> Service {
    svc.status.load_balancer.ingress = ips
        .iter()
        .map(|ip| LoadBalancerIngress {
            ip: Some(ip.to_string()),
            hostname: None,
        })
        .collect();
    svc
}

pub fn make_pod(name: &str, ns: &str, pod_labels: &[(&str, &str)], phase: PodPhase) -> Pod {
    Pod {
        name: name.to_string(),
        namespace: ns.to_string(),
        labels: labels(pod_labels),
        phase,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}
