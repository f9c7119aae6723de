mod api;
mod metrics;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wanderlust_core::{
    load_config, validate_config, CatalogSource, Favorites, FavoritesBackend, FavoritesStore,
    JsonCatalog, MemoryFavoritesStore, SqliteFavoritesStore,
};

use api::create_router;
use state::AppState;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("WANDERLUST_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Catalog dataset: {:?}", config.catalog.path);
    info!("Favorites backend: {:?}", config.favorites.backend);

    // Create the catalog source (JSON dataset, re-read per request)
    let catalog: Arc<dyn CatalogSource> = Arc::new(JsonCatalog::new(&config.catalog.path));

    // Create the favorites store
    let store: Arc<dyn FavoritesStore> = match config.favorites.backend {
        FavoritesBackend::Sqlite => Arc::new(
            SqliteFavoritesStore::new(&config.favorites.db_path)
                .context("Failed to open favorites database")?,
        ),
        FavoritesBackend::Memory => Arc::new(MemoryFavoritesStore::new()),
    };

    // Load persisted favorites
    let favorites =
        Arc::new(Favorites::open(store).context("Failed to load persisted favorites")?);
    info!("Favorites loaded ({} favorited)", favorites.count());

    // Create app state
    let state = Arc::new(AppState::new(config.clone(), catalog, favorites));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
