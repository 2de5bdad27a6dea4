mod catalog;
mod compile;
mod config;
mod editor;
mod errors;
mod extract;
mod routes;
mod state;
mod template;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::store::{CatalogBackend, CatalogStore, FileCatalog, RedisCatalog};
use crate::compile::LatexCompiler;
use crate::config::Config;
use crate::editor::session::EditorSession;
use crate::routes::build_router;
use crate::state::AppState;

/// Directive applied when `RUST_LOG` is unset. The target prefix is this
/// crate's name as tracing sees it, so the service's own logs stay visible
/// in a zero-config run.
fn default_log_directive(level: &str) -> String {
    format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), level)
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_directive(&config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume customizer API v{}", env!("CARGO_PKG_VERSION"));

    // Replacement catalog: redis when configured, local file otherwise.
    let remote: Option<Arc<dyn CatalogBackend>> = match &config.redis_url {
        Some(url) => {
            let client = redis::Client::open(url.clone())?;
            info!("Redis catalog backend initialized");
            Some(Arc::new(RedisCatalog::new(client)))
        }
        None => {
            info!(
                "REDIS_URL not set; catalog persists to {} only",
                config.catalog_path.display()
            );
            None
        }
    };
    let catalog = Arc::new(CatalogStore::new(
        remote,
        Arc::new(FileCatalog::new(config.catalog_path.clone())),
    ));

    let compiler = Arc::new(LatexCompiler::new(
        config.pdflatex_bin.clone(),
        config.compile_timeout_secs,
    ));
    info!(
        "LaTeX compiler: {} (timeout {}s)",
        config.pdflatex_bin, config.compile_timeout_secs
    );

    let state = AppState {
        session: Arc::new(RwLock::new(EditorSession::new())),
        catalog,
        compiler,
        config: config.clone(),
    };

    // Build router; unmatched routes fall through to the static UI.
    let static_files = ServeDir::new(&config.static_dir)
        .not_found_service(ServeFile::new(config.static_dir.join("index.html")));
    let app = build_router(state)
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
