//! Search/filter stage of the listing pipeline.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Destination;

/// Active search/region/type filter state.
///
/// Every field may independently be unset: empty search matches everything,
/// empty region disables the region filter, an empty tag set disables the
/// type filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text search, matched case-insensitively against name,
    /// description, and keywords.
    #[serde(default)]
    pub search: String,
    /// Exact region name. Case-sensitive.
    #[serde(default)]
    pub region: String,
    /// Required type tags. A destination must carry ALL of them (AND
    /// semantics, not ANY).
    #[serde(default)]
    pub types: BTreeSet<String>,
}

impl FilterCriteria {
    /// True when no field narrows the catalog.
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.region.is_empty() && self.types.is_empty()
    }
}

/// Return the destinations matching all active criteria.
///
/// Preserves the catalog's relative order and never mutates the input. A
/// required tag that no destination carries yields an empty result, not an
/// error.
pub fn filter(catalog: &[Destination], criteria: &FilterCriteria) -> Vec<Destination> {
    let search = criteria.search.trim().to_lowercase();

    catalog
        .iter()
        .filter(|dest| {
            matches_search(dest, &search)
                && matches_region(dest, &criteria.region)
                && matches_types(dest, &criteria.types)
        })
        .cloned()
        .collect()
}

fn matches_search(dest: &Destination, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    dest.name.to_lowercase().contains(search)
        || dest.description.to_lowercase().contains(search)
        || dest
            .keywords
            .iter()
            .any(|k| k.to_lowercase().contains(search))
}

fn matches_region(dest: &Destination, region: &str) -> bool {
    region.is_empty() || dest.region == region
}

fn matches_types(dest: &Destination, required: &BTreeSet<String>) -> bool {
    required.iter().all(|t| dest.types.contains(t))
}
