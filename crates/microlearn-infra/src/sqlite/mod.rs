//! SQLite-backed persistence.

pub mod node;
pub mod pool;

pub use node::SqliteNodeRepository;
pub use pool::DatabasePool;
