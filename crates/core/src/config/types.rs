use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub favorites: FavoritesConfig,
    #[serde(default)]
    pub listing: ListingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

/// Catalog dataset configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Path to the JSON dataset file.
    pub path: PathBuf,
}

/// Favorites persistence configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FavoritesConfig {
    /// Storage backend type
    #[serde(default)]
    pub backend: FavoritesBackend,
    /// Database file (used when backend = "sqlite")
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            backend: FavoritesBackend::default(),
            db_path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("wanderlust.db")
}

/// Available favorites backends
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FavoritesBackend {
    #[default]
    Sqlite,
    /// Non-durable; favorites reset on restart.
    Memory,
}

/// Listing pipeline defaults
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListingConfig {
    /// Items per listing page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Minimum rating for a homepage recommendation.
    #[serde(default = "default_recommended_min_rating")]
    pub recommended_min_rating: f64,
    /// Maximum number of homepage recommendations.
    #[serde(default = "default_recommended_count")]
    pub recommended_count: usize,
    /// Maximum number of homepage region tiles.
    #[serde(default = "default_home_region_count")]
    pub home_region_count: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            recommended_min_rating: default_recommended_min_rating(),
            recommended_count: default_recommended_count(),
            home_region_count: default_home_region_count(),
        }
    }
}

fn default_page_size() -> usize {
    6
}

fn default_recommended_min_rating() -> f64 {
    4.6
}

fn default_recommended_count() -> usize {
    6
}

fn default_home_region_count() -> usize {
    8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_config() {
        let toml = r#"
[catalog]
path = "destinations.json"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.catalog.path.to_str().unwrap(), "destinations.json");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host.to_string(), "0.0.0.0");
        assert_eq!(config.favorites.backend, FavoritesBackend::Sqlite);
        assert_eq!(config.favorites.db_path.to_str().unwrap(), "wanderlust.db");
        assert_eq!(config.listing.page_size, 6);
        assert_eq!(config.listing.recommended_min_rating, 4.6);
    }

    #[test]
    fn test_deserialize_missing_catalog_fails() {
        let toml = r#"
[server]
port = 8080
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_custom_values() {
        let toml = r#"
[catalog]
path = "/data/attractions.json"

[server]
host = "127.0.0.1"
port = 3000

[favorites]
backend = "memory"

[listing]
page_size = 12
recommended_count = 4
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.favorites.backend, FavoritesBackend::Memory);
        assert_eq!(config.listing.page_size, 12);
        assert_eq!(config.listing.recommended_count, 4);
        assert_eq!(config.listing.home_region_count, 8); // default
    }
}
