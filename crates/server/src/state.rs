use std::sync::Arc;

use wanderlust_core::{CatalogSource, Config, Favorites};

/// Shared application state
pub struct AppState {
    config: Config,
    catalog: Arc<dyn CatalogSource>,
    favorites: Arc<Favorites>,
}

impl AppState {
    pub fn new(config: Config, catalog: Arc<dyn CatalogSource>, favorites: Arc<Favorites>) -> Self {
        Self {
            config,
            catalog,
            favorites,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &dyn CatalogSource {
        self.catalog.as_ref()
    }

    pub fn favorites(&self) -> &Favorites {
        self.favorites.as_ref()
    }
}
