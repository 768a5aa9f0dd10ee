//! Shared domain types for Microlearn.
//!
//! Pure data: curriculum outlines and screens, knowledge nodes, the
//! dispatch request/error shapes, and the error taxonomy. No I/O here --
//! business logic lives in microlearn-core, implementations in
//! microlearn-infra.

pub mod curriculum;
pub mod dispatch;
pub mod error;
pub mod node;
