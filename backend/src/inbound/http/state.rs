//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only
//! depend on the repository ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{OrderRepository, ProductRepository, UserRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub orders: Arc<dyn OrderRepository>,
}

impl HttpState {
    /// Construct state from the three repository ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use storefront::inbound::http::state::HttpState;
    /// use storefront::outbound::memory::InMemoryStore;
    ///
    /// let store = Arc::new(InMemoryStore::new());
    /// let state = HttpState::new(store.clone(), store.clone(), store);
    /// let _ = state.users.clone();
    /// ```
    pub fn new(
        users: Arc<dyn UserRepository>,
        products: Arc<dyn ProductRepository>,
        orders: Arc<dyn OrderRepository>,
    ) -> Self {
        Self {
            users,
            products,
            orders,
        }
    }
}
