//! HTTP server and HTML pages
//!
//! Routes are organized into modules:
//! - routes::transactions: list, create, edit and delete pages, JSON API
//!
//! Pages are produced by an injected `render::Renderer`; the store is shared
//! behind a `tokio::sync::RwLock` so every mutation has a single writer.

pub mod error;
pub mod render;
pub mod routes;

use axum::{
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use txweb_config::Config;
use txweb_core::{IdAllocator, TransactionStore};

pub use error::ApiError;
pub use render::{HtmlRenderer, Renderer};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<TransactionStore>>,
    pub renderer: Arc<dyn Renderer>,
    pub config: Config,
}

impl AppState {
    /// Build state from config: store seeded per `store.seed`, built-in renderer
    pub fn new(config: Config) -> Self {
        let allocator = IdAllocator::new(config.store.id_allocation);
        let store = if config.store.seed {
            TransactionStore::seeded(allocator)
        } else {
            TransactionStore::new(allocator)
        };
        let renderer = Arc::new(HtmlRenderer::new(config.app.clone()));
        Self::with_parts(config, store, renderer)
    }

    pub fn with_parts(config: Config, store: TransactionStore, renderer: Arc<dyn Renderer>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            renderer,
            config,
        }
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::transactions::{
        api_transaction_detail, api_transactions, page_transaction_create, page_transaction_edit,
        page_transactions, transaction_delete, transaction_store, transaction_update,
    };

    Router::new()
        // API endpoints
        .route("/api/health", get(health_check))
        .route("/api/info", get(api_info))
        .route("/api/transactions", get(api_transactions))
        .route("/api/transactions/:id", get(api_transaction_detail))
        // Page routes
        .route("/", get(page_transactions))
        .route("/add", get(page_transaction_create).post(transaction_store))
        .route("/edit/:id", get(page_transaction_edit).post(transaction_update))
        .route("/delete/:id", post(transaction_delete))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Application metadata (JSON API)
async fn api_info(state: axum::extract::State<AppState>) -> Json<txweb_config::AppConfig> {
    Json(state.config.app.clone())
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-50 text-gray-900">
    {}
</body>
</html>"#,
        txweb_utils::escape_html(title),
        content
    )
}

/// Start the HTTP server
///
/// Binds `config.server.host:config.server.port` and serves until Ctrl-C.
pub async fn start_server(state: AppState) -> std::io::Result<()> {
    let addr = state.config.bind_address();
    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting txweb server on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - / (Transaction list)");
    log::info!("  - /add, /edit/:id, /delete/:id (Transaction forms)");
    log::info!("  - /api/* (JSON API endpoints)");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
