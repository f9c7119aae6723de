use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Catalog section exists (enforced by serde)
/// - Server port is not 0
/// - Listing knobs are usable
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.listing.page_size == 0 {
        return Err(ConfigError::ValidationError(
            "listing.page_size must be at least 1".to_string(),
        ));
    }

    if config.listing.recommended_count == 0 {
        return Err(ConfigError::ValidationError(
            "listing.recommended_count must be at least 1".to_string(),
        ));
    }

    if !(0.0..=5.0).contains(&config.listing.recommended_min_rating) {
        return Err(ConfigError::ValidationError(format!(
            "listing.recommended_min_rating must be within 0.0..=5.0, got {}",
            config.listing.recommended_min_rating
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CatalogConfig, FavoritesConfig, ListingConfig, ServerConfig};
    use std::net::IpAddr;
    use std::path::PathBuf;

    fn valid_config() -> Config {
        Config {
            catalog: CatalogConfig {
                path: PathBuf::from("destinations.json"),
            },
            server: ServerConfig::default(),
            favorites: FavoritesConfig::default(),
            listing: ListingConfig::default(),
        }
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_validate_port_zero_fails() {
        let mut config = valid_config();
        config.server = ServerConfig {
            host: "0.0.0.0".parse::<IpAddr>().unwrap(),
            port: 0,
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ValidationError(_)
        ));
    }

    #[test]
    fn test_validate_zero_page_size_fails() {
        let mut config = valid_config();
        config.listing.page_size = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_out_of_range_rating_fails() {
        let mut config = valid_config();
        config.listing.recommended_min_rating = 5.5;
        assert!(validate_config(&config).is_err());
    }
}
