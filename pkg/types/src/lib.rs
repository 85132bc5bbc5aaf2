pub mod config;
pub mod pod;
pub mod replicaset;
pub mod service;
