//! Replica set view for the k3rs dashboard.
//!
//! Joins replica sets, services and pods listed from the cluster into one
//! record per replica set. Everything here is a pure, synchronous scan over
//! already-fetched collections.

pub mod endpoint;
pub mod matcher;
pub mod pod_info;
pub mod replicaset_list;

#[cfg(test)]
mod testutil;

pub use replicaset_list::{ReplicaSetList, ReplicaSetRecord, build_replica_set_list};
