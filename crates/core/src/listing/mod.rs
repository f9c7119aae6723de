//! The listing pipeline: filter -> sort -> paginate.
//!
//! Every stage is a pure transformation over an in-memory collection; only
//! the catalog fetch that feeds the pipeline can fail, and that failure is
//! handled once at the boundary.

mod filter;
mod paginate;
mod sort;
mod view;

pub use filter::{filter, FilterCriteria};
pub use paginate::{paginate, Page};
pub use sort::{sort, SortDirection, SortKey, SortSpec};
pub use view::{ApplyOutcome, ViewState};

use serde::{Deserialize, Serialize};

use crate::catalog::Destination;

/// Everything needed to produce one listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub criteria: FilterCriteria,
    #[serde(default)]
    pub sort: SortSpec,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            sort: SortSpec::default(),
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    6
}

/// One rendered listing page.
pub type ListingPage = Page<Destination>;

/// Run the full pipeline over a catalog snapshot.
///
/// [`SortKey::FavoritedAt`] is meaningless without favorite state, so a plain
/// listing treats every destination as never-favorited (descending-id order);
/// the favorites view sorts through [`crate::favorites::Favorites::reconcile`]
/// instead.
pub fn run_listing(catalog: &[Destination], query: &ListingQuery) -> ListingPage {
    let filtered = filter(catalog, &query.criteria);
    let sorted = sort(&filtered, &query.sort, |_| None);
    paginate(&sorted, query.page_size, query.page)
}
