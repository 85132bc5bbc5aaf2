use pkg_types::replicaset::ReplicaSet;
use pkg_types::service::Service;
use std::collections::HashMap;

/// Check whether `labels` satisfy `selector`.
///
/// Every selector pair must be present in `labels` with the same value; extra
/// labels are ignored. An empty selector matches nothing, so a service or
/// replica set without a selector never appears to target every pod.
///
/// Used for both joins: service selector against replica set selector, and
/// replica set selector against pod labels.
pub fn matches(selector: &HashMap<String, String>, labels: &HashMap<String, String>) -> bool {
    if selector.is_empty() {
        return false;
    }
    for (key, value) in selector {
        match labels.get(key) {
            Some(v) if v == value => {}
            _ => return false,
        }
    }
    true
}

/// Services in the replica set's namespace whose selector targets the same
/// pods (or a subset of them). Keeps the order of `services`.
pub fn matching_services<'a>(services: &'a [Service], rs: &ReplicaSet) -> Vec<&'a Service> {
    services
        .iter()
        .filter(|svc| {
            svc.namespace == rs.namespace && matches(&svc.spec.selector, &rs.spec.selector)
        })
        .collect()
}
