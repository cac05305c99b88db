use crate::kernel::services::ports::Settings;
use crate::models::Catalog;

/// Immutable per-process state shared by every request.
#[derive(Debug)]
pub struct AppState {
    pub catalog: Catalog,
    pub settings: Settings,
}

impl AppState {
    pub fn new(catalog: Catalog, settings: Settings) -> Self {
        Self { catalog, settings }
    }
}
