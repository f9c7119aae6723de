//! JSON-file-backed catalog source.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use super::raw::{self, RawCatalog};
use super::{CatalogDocument, CatalogError, CatalogSource, Destination, Region};

/// Catalog backed by a JSON dataset file.
///
/// The file is re-read and re-parsed on every call, so edits to the dataset
/// show up on the next request without a restart. The dataset is small; if it
/// ever grows past that, this is the place to add caching.
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read and normalize the whole dataset.
    pub async fn load(&self) -> Result<CatalogDocument, CatalogError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::Unavailable(format!("{}: {}", self.path.display(), e)))?;

        let parsed: RawCatalog =
            serde_json::from_str(&content).map_err(|e| CatalogError::Malformed(e.to_string()))?;

        let doc = raw::normalize(parsed);
        debug!(
            destinations = doc.destinations.len(),
            regions = doc.regions.len(),
            "Loaded catalog"
        );
        Ok(doc)
    }
}

#[async_trait]
impl CatalogSource for JsonCatalog {
    async fn all_destinations(&self) -> Result<Vec<Destination>, CatalogError> {
        Ok(self.load().await?.destinations)
    }

    async fn all_regions(&self) -> Result<Vec<Region>, CatalogError> {
        Ok(self.load().await?.regions)
    }

    async fn destination_by_id(&self, id: u32) -> Result<Destination, CatalogError> {
        self.load()
            .await?
            .destinations
            .into_iter()
            .find(|d| d.id == id)
            .ok_or(CatalogError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_dataset(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_document() {
        let file = write_dataset(
            r#"{
                "destinations": [
                    {"Id": 1, "Name": "Great Wall", "Region": "Beijing, China", "Rating": 4.8},
                    {"Id": 2, "Name": "Bondi Beach", "Region": "Sydney, Australia", "Rating": 4.5}
                ],
                "regions": [
                    {"Id": 1, "Name": "Beijing, China"},
                    {"Id": 2, "Name": "Sydney, Australia"}
                ]
            }"#,
        );

        let catalog = JsonCatalog::new(file.path());
        let destinations = catalog.all_destinations().await.unwrap();
        let regions = catalog.all_regions().await.unwrap();
        assert_eq!(destinations.len(), 2);
        assert_eq!(regions.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let catalog = JsonCatalog::new("/nonexistent/destinations.json");
        let err = catalog.all_destinations().await.unwrap_err();
        assert!(matches!(err, CatalogError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_invalid_json_is_malformed() {
        let file = write_dataset("{not json");
        let catalog = JsonCatalog::new(file.path());
        let err = catalog.all_destinations().await.unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_lookup_by_id() {
        let file = write_dataset(
            r#"{"destinations": [{"Id": 7, "Name": "Kinkaku-ji"}], "regions": []}"#,
        );
        let catalog = JsonCatalog::new(file.path());

        let dest = catalog.destination_by_id(7).await.unwrap();
        assert_eq!(dest.name, "Kinkaku-ji");

        let err = catalog.destination_by_id(99).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(99)));
    }
}
