//! Types for the attraction catalog.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A travel attraction from the read-only catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Unique positive identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Region name (matches a [`Region::name`]).
    pub region: String,
    /// Type tags (e.g., "Historical and Cultural"). May be empty.
    pub types: Vec<String>,
    /// Rating in 0.0..=5.0.
    pub rating: f64,
    /// Keyword tokens used by text search.
    pub keywords: Vec<String>,
    /// Free-text description.
    pub description: String,
    /// Street address.
    pub address: String,
    /// Image reference for list views.
    pub list_image: String,
    /// Primary image reference for the detail view.
    pub main_image: String,
    /// Secondary detail-view image references.
    pub sub_images: Vec<String>,
}

/// A region used for filter options and homepage tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: u32,
    /// Region name (unique).
    pub name: String,
    /// Short introduction text.
    #[serde(default)]
    pub intro: String,
    /// Image reference for the region tile.
    #[serde(default)]
    pub image_path: String,
}

/// A fully parsed catalog: all destinations plus all regions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub destinations: Vec<Destination>,
    pub regions: Vec<Region>,
}

/// Errors for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The dataset could not be read. Retryable.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    /// The dataset was read but is not valid JSON of any accepted shape.
    #[error("Malformed catalog: {0}")]
    Malformed(String),

    /// No destination with the given id exists.
    #[error("No destination with id {0}")]
    NotFound(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_serializes_camel_case() {
        let dest = Destination {
            id: 1,
            name: "Great Wall".to_string(),
            region: "Beijing, China".to_string(),
            types: vec!["Historical and Cultural".to_string()],
            rating: 4.8,
            keywords: vec!["wall".to_string(), "history".to_string()],
            description: "A series of fortifications.".to_string(),
            address: "Huairou District".to_string(),
            list_image: "greatwall_list.jpg".to_string(),
            main_image: "greatwall_main.jpg".to_string(),
            sub_images: vec!["greatwall_1.jpg".to_string()],
        };

        let json = serde_json::to_string(&dest).unwrap();
        assert!(json.contains("\"listImage\""));
        assert!(json.contains("\"mainImage\""));
        assert!(json.contains("\"subImages\""));

        let parsed: Destination = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, 1);
        assert_eq!(parsed.types.len(), 1);
    }

    #[test]
    fn test_region_defaults() {
        let json = r#"{"id": 3, "name": "Kyoto, Japan"}"#;
        let region: Region = serde_json::from_str(json).unwrap();
        assert_eq!(region.name, "Kyoto, Japan");
        assert!(region.intro.is_empty());
        assert!(region.image_path.is_empty());
    }
}
