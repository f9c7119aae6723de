//! Boundary normalization for raw dataset shapes.
//!
//! Dataset files have been produced by different tools over time, so records
//! may carry PascalCase or camelCase field names and `type` may be a single
//! string instead of a list. All accepted shapes are mapped to the canonical
//! records in one place here; consumers never see the raw shapes.

use serde::Deserialize;
use tracing::warn;

use super::{CatalogDocument, Destination, Region};

/// Top-level raw catalog: either a `{ destinations, regions }` document or a
/// bare destination array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawCatalog {
    Document {
        #[serde(default, alias = "Destinations")]
        destinations: Vec<RawDestination>,
        #[serde(default, alias = "Regions")]
        regions: Vec<RawRegion>,
    },
    List(Vec<RawDestination>),
}

/// A string-or-list field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(s) if s.is_empty() => Vec::new(),
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawDestination {
    #[serde(default, alias = "Id")]
    id: Option<u32>,
    #[serde(default, alias = "Name")]
    name: Option<String>,
    #[serde(default, alias = "Region")]
    region: Option<String>,
    #[serde(default, rename = "type", alias = "Type")]
    types: Option<OneOrMany>,
    #[serde(default, alias = "Rating")]
    rating: Option<f64>,
    #[serde(default, alias = "Keywords")]
    keywords: Option<Vec<String>>,
    #[serde(default, alias = "Description")]
    description: Option<String>,
    #[serde(default, alias = "Address")]
    address: Option<String>,
    #[serde(default, rename = "listImage", alias = "ListImage")]
    list_image: Option<String>,
    #[serde(default, rename = "mainImage", alias = "MainImage")]
    main_image: Option<String>,
    #[serde(default, rename = "subImages", alias = "SubImages")]
    sub_images: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawRegion {
    #[serde(default, alias = "Id")]
    id: Option<u32>,
    #[serde(default, alias = "Name")]
    name: Option<String>,
    #[serde(default, alias = "Intro")]
    intro: Option<String>,
    #[serde(default, rename = "imagePath", alias = "ImagePath")]
    image_path: Option<String>,
}

/// Map a raw catalog to canonical records.
pub(crate) fn normalize(raw: RawCatalog) -> CatalogDocument {
    let (destinations, regions) = match raw {
        RawCatalog::Document {
            destinations,
            regions,
        } => (destinations, regions),
        RawCatalog::List(destinations) => (destinations, Vec::new()),
    };

    let destinations = destinations
        .into_iter()
        .filter_map(normalize_destination)
        .collect();

    let regions = regions
        .into_iter()
        .enumerate()
        .map(|(index, raw)| normalize_region(raw, index))
        .collect();

    CatalogDocument {
        destinations,
        regions,
    }
}

/// Records without a usable id cannot be referenced by filters, detail
/// lookups, or favorites, so they are dropped rather than failing the load.
fn normalize_destination(raw: RawDestination) -> Option<Destination> {
    let Some(id) = raw.id else {
        warn!(name = raw.name.as_deref().unwrap_or(""), "Skipping destination record without id");
        return None;
    };

    Some(Destination {
        id,
        name: raw.name.unwrap_or_else(|| "Unknown".to_string()),
        region: raw.region.unwrap_or_default(),
        types: raw.types.map(OneOrMany::into_vec).unwrap_or_default(),
        rating: raw.rating.unwrap_or(0.0),
        keywords: raw.keywords.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        address: raw.address.unwrap_or_default(),
        list_image: raw.list_image.unwrap_or_default(),
        main_image: raw.main_image.unwrap_or_default(),
        sub_images: raw.sub_images.unwrap_or_default(),
    })
}

/// Regions without an id get a 1-based positional one, matching how the
/// homepage tiles number their images.
fn normalize_region(raw: RawRegion, index: usize) -> Region {
    Region {
        id: raw.id.unwrap_or(index as u32 + 1),
        name: raw.name.unwrap_or_default(),
        intro: raw.intro.unwrap_or_default(),
        image_path: raw.image_path.unwrap_or_default(),
    }
}
