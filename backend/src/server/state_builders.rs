//! Repository wiring for the HTTP state.

use std::sync::Arc;

use tracing::info;

use storefront::inbound::http::state::HttpState;
use storefront::outbound::memory::InMemoryStore;
use storefront::outbound::persistence::{
    MongoOrderRepository, MongoProductRepository, MongoStore, MongoUserRepository,
};
use storefront::settings::AppSettings;

/// Connect the configured backend and bundle its repositories.
///
/// # Errors
/// Returns [`std::io::Error`] when the document store cannot be reached.
pub async fn build_http_state(settings: &AppSettings) -> std::io::Result<HttpState> {
    if settings.in_memory {
        info!("serving from the in-memory store");
        let store = Arc::new(InMemoryStore::new());
        return Ok(HttpState::new(store.clone(), store.clone(), store));
    }

    let store = MongoStore::connect(settings.store_config())
        .await
        .map_err(std::io::Error::other)?;
    info!(database = store.database_name(), "connected to document store");
    Ok(HttpState::new(
        Arc::new(MongoUserRepository::new(store.clone())),
        Arc::new(MongoProductRepository::new(store.clone())),
        Arc::new(MongoOrderRepository::new(store)),
    ))
}
