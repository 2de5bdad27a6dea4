use std::sync::Arc;

use tokio::sync::RwLock;

use crate::catalog::store::CatalogStore;
use crate::compile::LatexCompiler;
use crate::config::Config;
use crate::editor::session::EditorSession;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single active editing session. Exclusively owned here; every
    /// mutation happens synchronously under the write lock.
    pub session: Arc<RwLock<EditorSession>>,
    /// Replacement catalog with its persistence fallback chain.
    pub catalog: Arc<CatalogStore>,
    pub compiler: Arc<LatexCompiler>,
    pub config: Config,
}
