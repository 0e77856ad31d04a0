//! Application state shared by every request handler.

use std::sync::Arc;

use blackhole_core::storage::RequestRepository;

/// Shared application state.
///
/// Cloned for each request handler. Holds the single storage handle opened
/// at startup by `storage::connect`.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn RequestRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn RequestRepository>) -> Self {
        Self { repo }
    }
}
