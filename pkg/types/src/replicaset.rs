use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::pod::PodSpec;

// --- ReplicaSet status ---

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplicaSetStatus {
    /// Replicas observed by the controller.
    #[serde(default)]
    pub replicas: u32,
}

// --- ReplicaSet spec ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplicaSetSpec {
    pub replicas: u32,
    #[serde(default)]
    pub selector: HashMap<String, String>,
    #[serde(default)]
    pub template: PodSpec,
}

// --- ReplicaSet ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplicaSet {
    pub name: String,
    pub namespace: String,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub annotations: HashMap<String, String>,
    pub spec: ReplicaSetSpec,
    #[serde(default)]
    pub status: ReplicaSetStatus,
    pub created_at: DateTime<Utc>,
}
