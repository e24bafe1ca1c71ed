//! Application state shared by the route builders.

use database::DatabaseResult;
use database::mongodb::connect_from_config_with_retry;
use mongodb::{Client, Database};

use crate::config::Config;

/// Cloned into each router (the driver types are cheap handles over one pool).
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Shared client, shut down once on exit
    pub mongo_client: Client,
    /// Database named by `config.mongodb.database`
    pub db: Database,
}

impl AppState {
    pub fn new(config: Config, mongo_client: Client) -> Self {
        let db = mongo_client.database(&config.mongodb.database);
        Self {
            config,
            mongo_client,
            db,
        }
    }

    /// Connect (with retry) and verify the server answers before serving.
    pub async fn connect(config: Config) -> DatabaseResult<Self> {
        let client = connect_from_config_with_retry(&config.mongodb, None).await?;
        Ok(Self::new(config, client))
    }
}
