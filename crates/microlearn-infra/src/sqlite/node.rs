//! SQLite knowledge-node repository.
//!
//! Implements `NodeStore` from microlearn-core using sqlx with split
//! read/write pools. Timestamps are stored as RFC 3339 text, categories as
//! their label strings.

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

use microlearn_core::store::NodeStore;
use microlearn_types::error::RepositoryError;
use microlearn_types::node::{Category, KnowledgeNode, TopicTrend};

use super::pool::DatabasePool;

/// SQLite-backed implementation of `NodeStore`.
pub struct SqliteNodeRepository {
    pool: DatabasePool,
}

impl SqliteNodeRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn row_to_node(row: &SqliteRow) -> Result<KnowledgeNode, RepositoryError> {
    let id: String = row
        .try_get("id")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;
    let id = Uuid::parse_str(&id).map_err(|e| RepositoryError::Query(format!("invalid id: {e}")))?;

    let category: String = row
        .try_get("category")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;
    let completed_at: String = row
        .try_get("completed_at")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

    Ok(KnowledgeNode {
        id,
        topic: row
            .try_get("topic")
            .map_err(|e| RepositoryError::Query(e.to_string()))?,
        headline: row
            .try_get("headline")
            .map_err(|e| RepositoryError::Query(e.to_string()))?,
        body: row
            .try_get("body")
            .map_err(|e| RepositoryError::Query(e.to_string()))?,
        category: Category::from_label_or_default(&category),
        completed_at: parse_datetime(&completed_at)?,
    })
}

impl NodeStore for SqliteNodeRepository {
    async fn save(&self, node: &KnowledgeNode) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO knowledge_nodes (id, topic, headline, body, category, completed_at)
               VALUES (?, ?, ?, ?, ?, ?)
               ON CONFLICT(id) DO UPDATE SET
                   topic = excluded.topic,
                   headline = excluded.headline,
                   body = excluded.body,
                   category = excluded.category,
                   completed_at = excluded.completed_at"#,
        )
        .bind(node.id.to_string())
        .bind(&node.topic)
        .bind(&node.headline)
        .bind(&node.body)
        .bind(node.category.to_string())
        .bind(node.completed_at.to_rfc3339())
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<KnowledgeNode>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, topic, headline, body, category, completed_at
             FROM knowledge_nodes ORDER BY completed_at DESC",
        )
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter().map(row_to_node).collect()
    }

    async fn list_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<KnowledgeNode>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, topic, headline, body, category, completed_at
             FROM knowledge_nodes WHERE category = ? ORDER BY completed_at DESC",
        )
        .bind(category.to_string())
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter().map(row_to_node).collect()
    }

    async fn trend_topics(&self) -> Result<Vec<TopicTrend>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT topic, COUNT(*) as nodes
             FROM knowledge_nodes GROUP BY topic ORDER BY nodes DESC, topic ASC",
        )
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter()
            .map(|row| {
                Ok(TopicTrend {
                    topic: row
                        .try_get("topic")
                        .map_err(|e| RepositoryError::Query(e.to_string()))?,
                    nodes: row
                        .try_get("nodes")
                        .map_err(|e| RepositoryError::Query(e.to_string()))?,
                })
            })
            .collect()
    }
}
