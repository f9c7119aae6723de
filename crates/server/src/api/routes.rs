use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{destinations, favorites, handlers, middleware::metrics_middleware};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        .route("/metrics", get(handlers::metrics))
        // Catalog
        .route("/catalog", get(destinations::all_data))
        .route("/regions", get(destinations::list_regions))
        .route("/home", get(destinations::home))
        // Destinations (listing pipeline + detail lookup)
        .route("/destinations", get(destinations::list_destinations))
        .route("/destinations/{id}", get(destinations::get_destination))
        // Favorites
        .route("/favorites", get(favorites::list_favorites))
        .route("/favorites", delete(favorites::clear_favorites))
        .route("/favorites/{id}", post(favorites::add_favorite))
        .route("/favorites/{id}", delete(favorites::remove_favorite))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
