//! Knowledge-node store trait.
//!
//! Explicitly injected storage service for completed learning screens.
//! Uses RPITIT (native async fn in traits, Rust 2024 edition).
//! Implementations live in microlearn-infra.

use microlearn_types::error::RepositoryError;
use microlearn_types::node::{Category, KnowledgeNode, TopicTrend};

/// Persistent storage for knowledge nodes.
pub trait NodeStore: Send + Sync {
    /// Save a node (upsert by id).
    fn save(
        &self,
        node: &KnowledgeNode,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// All nodes, most recently completed first.
    fn list(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<KnowledgeNode>, RepositoryError>> + Send;

    /// Nodes in one category, most recently completed first.
    fn list_by_category(
        &self,
        category: Category,
    ) -> impl std::future::Future<Output = Result<Vec<KnowledgeNode>, RepositoryError>> + Send;

    /// Per-topic completion counts, highest first.
    fn trend_topics(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<TopicTrend>, RepositoryError>> + Send;
}
