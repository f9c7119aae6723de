//! Favorites API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use wanderlust_core::{Destination, FavoriteOutcome, FavoritesError, FavoritesSort};

use super::{catalog_error, ErrorResponse};
use crate::metrics::FAVORITES_OPS_TOTAL;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FavoritesParams {
    #[serde(default)]
    pub sort_by: Option<FavoritesSort>,
}

/// A favorited destination with its favorited-at timestamp attached.
#[derive(Debug, Serialize)]
pub struct FavoriteView {
    #[serde(flatten)]
    pub destination: Destination,
    pub favorited_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub items: Vec<FavoriteView>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub success: bool,
    pub message: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn storage_error(err: FavoritesError) -> ApiError {
    error!("Favorites storage failed: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// GET /api/v1/favorites
///
/// Reconciles the favorited id set against the current catalog. Ids the
/// catalog no longer carries are left out of the response but stay favorited.
pub async fn list_favorites(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FavoritesParams>,
) -> Result<Json<FavoritesResponse>, ApiError> {
    let catalog = state
        .catalog()
        .all_destinations()
        .await
        .map_err(catalog_error)?;

    let sort_by = params.sort_by.unwrap_or_default();
    let favorites = state.favorites();
    let items: Vec<FavoriteView> = favorites
        .reconcile(&catalog, sort_by)
        .into_iter()
        .map(|destination| FavoriteView {
            favorited_at: favorites.favorited_at(destination.id),
            destination,
        })
        .collect();

    let total = items.len();
    Ok(Json(FavoritesResponse { items, total }))
}

/// POST /api/v1/favorites/{id}
///
/// Idempotent: re-adding reports `success: false` and keeps the original
/// timestamp. The id is not checked against the catalog, so a favorite can
/// outlive (or predate) its destination.
pub async fn add_favorite(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<MutationResponse>, ApiError> {
    let outcome = state.favorites().add(id).map_err(storage_error)?;
    Ok(Json(mutation_response("add", outcome)))
}

/// DELETE /api/v1/favorites/{id}
pub async fn remove_favorite(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<MutationResponse>, ApiError> {
    let outcome = state.favorites().remove(id).map_err(storage_error)?;
    Ok(Json(mutation_response("remove", outcome)))
}

/// DELETE /api/v1/favorites
pub async fn clear_favorites(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MutationResponse>, ApiError> {
    state.favorites().clear().map_err(storage_error)?;
    FAVORITES_OPS_TOTAL.with_label_values(&["clear", "cleared"]).inc();
    Ok(Json(MutationResponse {
        success: true,
        message: "Favorites cleared".to_string(),
    }))
}

fn mutation_response(op: &str, outcome: FavoriteOutcome) -> MutationResponse {
    FAVORITES_OPS_TOTAL
        .with_label_values(&[op, outcome.as_str()])
        .inc();
    MutationResponse {
        success: outcome.changed(),
        message: outcome.message().to_string(),
    }
}
