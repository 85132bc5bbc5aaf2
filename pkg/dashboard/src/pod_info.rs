use pkg_types::pod::{Pod, PodPhase};
use pkg_types::replicaset::ReplicaSet;
use serde::{Deserialize, Serialize};

use crate::matcher::matches;

/// Aggregate information about the pods of a replica set.
///
/// `current` and `desired` are copied from the replica set itself; the other
/// counters come from scanning live pods. The two sources are not reconciled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodInfo {
    /// Replicas reported by the controller status.
    pub current: u32,
    /// Replicas requested by `spec.replicas`.
    pub desired: u32,
    pub running: u32,
    /// Pods still in the Pending phase.
    pub waiting: u32,
    pub failed: u32,
}

/// Count the pods selected by `rs` by phase.
///
/// Only Running, Pending and Failed are counted. Pods that are scheduled,
/// creating containers, succeeded or unknown fall into no bucket.
pub fn pod_info(rs: &ReplicaSet, pods: &[Pod]) -> PodInfo {
    let mut info = PodInfo {
        current: rs.status.replicas,
        desired: rs.spec.replicas,
        ..Default::default()
    };

    for pod in pods {
        if pod.namespace != rs.namespace || !matches(&rs.spec.selector, &pod.labels) {
            continue;
        }
        match pod.phase {
            PodPhase::Running => info.running += 1,
            PodPhase::Pending => info.waiting += 1,
            PodPhase::Failed => info.failed += 1,
            _ => {}
        }
    }

    info
}
