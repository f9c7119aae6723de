//! Attraction catalog - the read-only dataset of destinations and regions.
//!
//! The catalog is sourced from a JSON file and reloaded fresh per request.
//! All raw-shape tolerance lives in [`raw`]; everything downstream of this
//! module only ever sees canonical records.

mod json;
mod raw;
mod types;

pub use json::JsonCatalog;
pub use types::*;

use async_trait::async_trait;

/// Trait for catalog data sources.
///
/// The fetch is the only suspension point in the core: every downstream
/// pipeline stage is a pure synchronous transformation.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Retrieve every destination in the catalog.
    async fn all_destinations(&self) -> Result<Vec<Destination>, CatalogError>;

    /// Retrieve every region in the catalog.
    async fn all_regions(&self) -> Result<Vec<Region>, CatalogError>;

    /// Look up a single destination by id.
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown id.
    async fn destination_by_id(&self, id: u32) -> Result<Destination, CatalogError>;
}
