use std::sync::Arc;

use tokio::sync::Mutex;

use goalpost_storage::store::Store;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Handlers hold the store lock for their whole read or
/// read-modify-persist sequence, so requests are applied one at a time.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<Store>>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}
