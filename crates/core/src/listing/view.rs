//! View state with stale-response rejection.
//!
//! A view holds the query the user currently wants and the last page that
//! was actually rendered. Catalog fetches are single-shot: there is no
//! cancellation primitive, so a superseding query simply causes the old
//! fetch's result to be discarded when it eventually arrives.

use crate::catalog::Destination;

use super::{run_listing, ListingPage, ListingQuery};

/// Outcome of applying a fetched catalog to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The result matched the current query and was rendered.
    Applied,
    /// The query changed while the fetch was in flight; the result was
    /// discarded and the previously rendered page left untouched.
    Stale,
}

/// Explicit, immutable-query view model threaded through the pipeline
/// instead of module-level mutable fields.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    query: ListingQuery,
    rendered: Option<ListingPage>,
}

impl ViewState {
    pub fn new(query: ListingQuery) -> Self {
        Self {
            query,
            rendered: None,
        }
    }

    /// The query a fetch should currently be answering.
    pub fn query(&self) -> &ListingQuery {
        &self.query
    }

    /// The last successfully rendered page, if any. A failed or stale fetch
    /// never clears this.
    pub fn rendered(&self) -> Option<&ListingPage> {
        self.rendered.as_ref()
    }

    /// Supersede the current query. Any in-flight fetch for the previous
    /// query will be rejected as stale when it lands.
    pub fn set_query(&mut self, query: ListingQuery) {
        self.query = query;
    }

    /// Apply a fetched catalog snapshot for the query that originated it.
    ///
    /// The snapshot is only rendered if `origin` still equals the current
    /// query; otherwise the result is dropped.
    pub fn apply_fetched(
        &mut self,
        origin: &ListingQuery,
        catalog: &[Destination],
    ) -> ApplyOutcome {
        if *origin != self.query {
            return ApplyOutcome::Stale;
        }
        self.rendered = Some(run_listing(catalog, &self.query));
        ApplyOutcome::Applied
    }
}
