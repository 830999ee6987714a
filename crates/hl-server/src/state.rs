//! Shared handler state.

use std::sync::Arc;

use hl_core::Settings;
use hl_data::{HolidayService, JsonDirSource, YearDataStore};
use tracing::info;

/// State cloned into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    service: HolidayService,
}

impl AppState {
    /// Wrap an existing service.
    pub fn new(service: HolidayService) -> Self {
        Self { service }
    }

    /// Build the store described by `settings` and warm it with
    /// `settings.data.preload`.
    pub fn from_settings(settings: &Settings) -> Self {
        let store = YearDataStore::new(JsonDirSource::new(settings.data.dir.clone()));
        if !settings.data.preload.is_empty() {
            let loaded = store.preload(&settings.data.preload);
            info!(
                requested = settings.data.preload.len(),
                loaded,
                "preloaded year data"
            );
        }
        Self::new(HolidayService::new(Arc::new(store)))
    }

    /// The query service.
    pub fn service(&self) -> &HolidayService {
        &self.service
    }
}
