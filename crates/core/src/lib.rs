pub mod catalog;
pub mod config;
pub mod favorites;
pub mod listing;
pub mod testing;

pub use catalog::{
    CatalogDocument, CatalogError, CatalogSource, Destination, JsonCatalog, Region,
};
pub use config::{
    load_config, load_config_from_str, validate_config, CatalogConfig, Config, ConfigError,
    FavoritesBackend, FavoritesConfig, ListingConfig, ServerConfig,
};
pub use favorites::{
    FavoriteOutcome, FavoriteRecord, Favorites, FavoritesError, FavoritesSort, FavoritesStore,
    MemoryFavoritesStore, SqliteFavoritesStore,
};
pub use listing::{
    filter, paginate, run_listing, sort, ApplyOutcome, FilterCriteria, ListingPage, ListingQuery,
    Page, SortDirection, SortKey, SortSpec, ViewState,
};
