use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::FromEnv;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!(
        url = %config.mongodb.redacted_url(),
        database = %config.mongodb.database,
        collection = %config.mongodb.collection,
        "Connecting to MongoDB"
    );

    let state = AppState::connect(config).await?;

    let app = create_router::<openapi::ApiDoc>(
        api::routes(&state).merge(health_router(state.config.app)),
    );

    info!(
        "Starting Items API ({:?} shutdown timeout)",
        state.config.shutdown_timeout
    );

    let client = state.mongo_client.clone();
    create_production_app(
        app,
        &state.config.server,
        state.config.shutdown_timeout,
        async move {
            info!("Shutting down: closing MongoDB connections");
            client.shutdown().await;
            info!("MongoDB connection closed successfully");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Items API shutdown complete");
    Ok(())
}
