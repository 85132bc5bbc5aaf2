pub mod health;
pub mod replicasets;
