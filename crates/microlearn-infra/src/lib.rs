//! Infrastructure implementations for Microlearn.
//!
//! Concrete backing for the traits defined in microlearn-core: the reqwest
//! transport to the upstream messages API, the offline stub transport, the
//! SQLite knowledge-node repository, and configuration loading.

pub mod config;
pub mod sqlite;
pub mod transport;
