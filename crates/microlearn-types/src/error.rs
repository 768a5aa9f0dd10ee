use thiserror::Error;

/// Errors turning a backend response body into a domain value.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("empty response from model backend")]
    EmptyResponse,

    #[error("malformed generated JSON: {0}")]
    Malformed(String),
}

/// Errors from repository operations (used by trait definitions in microlearn-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,
}
