//! Centralized constants for the k3rs dashboard.
//!
//! All project-wide constant values live here.
//! Change a value in one place and it applies everywhere.

pub mod dashboard;
pub mod network;
pub mod paths;
