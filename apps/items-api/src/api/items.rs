//! Items API routes
//!
//! Wires the items domain onto the configured collection.

use axum::Router;
use domain_items::{ItemService, MongoItemRepository, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository =
        MongoItemRepository::with_collection(state.db.clone(), &state.config.mongodb.collection);

    handlers::router(ItemService::new(repository))
}
