//! Shared application state for all routes.

use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    /// Store handle constructed at startup and injected into every handler.
    pub store: Store,
}
