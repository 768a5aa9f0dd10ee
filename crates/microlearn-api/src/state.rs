//! Application state wiring all services together.
//!
//! AppState holds the dispatcher and the knowledge-node store used by the
//! REST handlers. The transport behind the dispatcher is picked at startup
//! (live HTTP vs offline stub) from the environment.

use std::sync::Arc;

use microlearn_core::dispatch::{BoxTransport, ModelDispatcher};
use microlearn_infra::config::Config;
use microlearn_infra::sqlite::{DatabasePool, SqliteNodeRepository};
use microlearn_infra::transport::select_transport;

/// Shared application state for the REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<ModelDispatcher<BoxTransport>>,
    pub node_store: Arc<SqliteNodeRepository>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Initialize the application state: resolve config, connect to the
    /// database, pick the transport.
    pub async fn init() -> anyhow::Result<Self> {
        let config = Config::from_env();

        tokio::fs::create_dir_all(&config.data_dir).await?;

        let db_pool = DatabasePool::new(&config.database_url()).await?;
        let node_store = SqliteNodeRepository::new(db_pool);

        let transport = select_transport(&config);
        let dispatcher =
            ModelDispatcher::new(transport).with_deadline(config.dispatch.overall_deadline());

        Ok(Self {
            dispatcher: Arc::new(dispatcher),
            node_store: Arc::new(node_store),
            config: Arc::new(config),
        })
    }
}
