//! Destination and region API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use wanderlust_core::{
    paginate, run_listing, sort, CatalogDocument, Destination, FilterCriteria, ListingQuery,
    Region, SortDirection, SortKey, SortSpec,
};

use super::{catalog_error, ErrorResponse};
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ListingParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    /// Comma-separated required type tags (AND semantics).
    #[serde(default)]
    pub types: Option<String>,
    #[serde(default)]
    pub sort: Option<SortKey>,
    #[serde(default)]
    pub order: Option<SortDirection>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub page_size: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ListingResponse {
    pub items: Vec<Destination>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

#[derive(Debug, Serialize)]
pub struct RegionsResponse {
    pub regions: Vec<Region>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub recommended: Vec<Destination>,
    pub regions: Vec<Region>,
}

type ApiError = (axum::http::StatusCode, Json<ErrorResponse>);

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/destinations
///
/// Paginated listing: filter -> sort -> paginate. Stale or out-of-range page
/// numbers are clamped, never rejected.
pub async fn list_destinations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListingParams>,
) -> Result<Json<ListingResponse>, ApiError> {
    let query = ListingQuery {
        criteria: FilterCriteria {
            search: params.search.unwrap_or_default(),
            region: params.region.unwrap_or_default(),
            types: params
                .types
                .as_deref()
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
        },
        sort: SortSpec::new(
            params.sort.unwrap_or(SortKey::Rating),
            params.order.unwrap_or(SortDirection::Descending),
        ),
        page: params.page.unwrap_or(1),
        page_size: params
            .page_size
            .unwrap_or(state.config().listing.page_size),
    };

    let catalog = state
        .catalog()
        .all_destinations()
        .await
        .map_err(catalog_error)?;

    let page = run_listing(&catalog, &query);
    Ok(Json(ListingResponse {
        page: page.page_number,
        total_pages: page.total_pages,
        total_items: page.total_items,
        items: page.items,
    }))
}

/// GET /api/v1/destinations/{id}
pub async fn get_destination(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<Destination>, ApiError> {
    let destination = state
        .catalog()
        .destination_by_id(id)
        .await
        .map_err(catalog_error)?;
    Ok(Json(destination))
}

/// GET /api/v1/catalog
///
/// The full dataset in one response: `{ destinations, regions }`.
pub async fn all_data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CatalogDocument>, ApiError> {
    let destinations = state
        .catalog()
        .all_destinations()
        .await
        .map_err(catalog_error)?;
    let regions = state.catalog().all_regions().await.map_err(catalog_error)?;

    Ok(Json(CatalogDocument {
        destinations,
        regions,
    }))
}

/// GET /api/v1/regions
pub async fn list_regions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RegionsResponse>, ApiError> {
    let regions = state.catalog().all_regions().await.map_err(catalog_error)?;
    let total = regions.len();
    Ok(Json(RegionsResponse { regions, total }))
}

/// GET /api/v1/home
///
/// Homepage data: top-rated recommendations plus the leading region tiles.
pub async fn home(State(state): State<Arc<AppState>>) -> Result<Json<HomeResponse>, ApiError> {
    let listing = &state.config().listing;

    let destinations = state
        .catalog()
        .all_destinations()
        .await
        .map_err(catalog_error)?;
    let mut regions = state.catalog().all_regions().await.map_err(catalog_error)?;

    let min_rating = listing.recommended_min_rating;
    let rated: Vec<_> = destinations
        .into_iter()
        .filter(|d| d.rating >= min_rating)
        .collect();
    let ordered = sort(
        &rated,
        &SortSpec::new(SortKey::Rating, SortDirection::Descending),
        |_| None,
    );
    let recommended = paginate(&ordered, listing.recommended_count, 1).items;

    regions.truncate(listing.home_region_count);

    Ok(Json(HomeResponse {
        recommended,
        regions,
    }))
}
