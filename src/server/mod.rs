use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::store::Catalog;

pub mod routes;

/// Server state. The mutex serializes requests so each operation applies atomically.
pub struct AppState {
    pub catalog: Mutex<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Mutex::new(catalog),
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api", post(routes::execute))
        .route("/api/schema", get(routes::get_schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(addr: SocketAddr, catalog: Catalog) -> anyhow::Result<()> {
    tracing::info!(
        "Catalog ready: {} recipes, {} authors, {} ingredients (cascade: {})",
        catalog.recipes().len(),
        catalog.authors().len(),
        catalog.ingredients().len(),
        catalog.cascade_policy()
    );
    let app = create_router(Arc::new(AppState::new(catalog)));

    tracing::info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
