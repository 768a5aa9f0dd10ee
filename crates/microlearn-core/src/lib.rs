//! Business logic for Microlearn.
//!
//! The centerpiece is [`dispatch`]: a model-fallback request dispatcher that
//! delivers one logical request to the generative backend, trying an ordered
//! candidate list of model identifiers until one accepts. [`generate`] holds
//! prompt construction and response parsing for the three generative tasks,
//! and [`store`] defines the knowledge-node storage trait implemented in
//! microlearn-infra.

pub mod dispatch;
pub mod generate;
pub mod store;
