pub mod destinations;
pub mod favorites;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::create_router;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::error;
use wanderlust_core::CatalogError;

use crate::metrics::CATALOG_FETCH_ERRORS_TOTAL;

/// Error body shared by all handlers.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Map a catalog error to an HTTP response, handled once at the boundary so
/// the pipeline stages never see failures.
pub(crate) fn catalog_error(err: CatalogError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, kind) = match &err {
        CatalogError::Unavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "unavailable"),
        CatalogError::Malformed(_) => (StatusCode::SERVICE_UNAVAILABLE, "malformed"),
        CatalogError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
    };

    if status == StatusCode::SERVICE_UNAVAILABLE {
        CATALOG_FETCH_ERRORS_TOTAL.with_label_values(&[kind]).inc();
        error!("Catalog fetch failed: {}", err);
    }

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}
