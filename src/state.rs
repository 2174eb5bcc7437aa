use std::sync::Arc;

use crate::models::PageMetadata;

/// Shared application state passed to all handlers.
/// Holds only read-only data; submissions never write to it.
#[derive(Clone)]
pub struct AppState {
    /// Values the form is prefilled with on first load.
    pub defaults: Arc<PageMetadata>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            defaults: Arc::new(PageMetadata::sample()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
