//! Catalog persistence backends and the fallback chain.
//!
//! Load order mirrors the original deployment: remote key-value store first
//! (redis, when configured), then the local JSON file, then the built-in
//! defaults. A load failure anywhere in the chain is recovered, never
//! surfaced as a blocking error. Saves write the file as the authoritative
//! copy and mirror to redis best-effort.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use redis::AsyncCommands;
use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::defaults::default_points;

const REDIS_KEY: &str = "replacement-points";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

/// One persistence backend for the ordered point list, addressed as a whole.
#[async_trait]
pub trait CatalogBackend: Send + Sync {
    fn name(&self) -> &'static str;

    /// `Ok(None)` means the backend is reachable but holds no catalog.
    async fn load(&self) -> Result<Option<Vec<String>>, CatalogError>;

    async fn save(&self, points: &[String]) -> Result<(), CatalogError>;
}

/// Local JSON file backend (development default).
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl CatalogBackend for FileCatalog {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn load(&self) -> Result<Option<Vec<String>>, CatalogError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, points: &[String]) -> Result<(), CatalogError> {
        let raw = serde_json::to_string_pretty(points)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }
}

/// Redis backend: the whole list as one JSON blob under a single key.
pub struct RedisCatalog {
    client: redis::Client,
}

impl RedisCatalog {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogBackend for RedisCatalog {
    fn name(&self) -> &'static str {
        "redis"
    }

    async fn load(&self) -> Result<Option<Vec<String>>, CatalogError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let raw: Option<String> = conn.get(REDIS_KEY).await?;
        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, points: &[String]) -> Result<(), CatalogError> {
        let raw = serde_json::to_string(points)?;
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = conn.set(REDIS_KEY, raw).await?;
        Ok(())
    }
}

/// The catalog service handlers talk to: remote → file → defaults.
pub struct CatalogStore {
    remote: Option<Arc<dyn CatalogBackend>>,
    file: Arc<dyn CatalogBackend>,
}

impl CatalogStore {
    pub fn new(remote: Option<Arc<dyn CatalogBackend>>, file: Arc<dyn CatalogBackend>) -> Self {
        Self { remote, file }
    }

    /// Loads the point list, falling back through the chain. Never fails:
    /// the built-in defaults are the terminal fallback.
    pub async fn load_points(&self) -> Vec<String> {
        for backend in self.remote.iter().chain(std::iter::once(&self.file)) {
            match backend.load().await {
                Ok(Some(points)) => {
                    debug!("Loaded {} replacement points from {}", points.len(), backend.name());
                    return points;
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("Catalog backend {} unavailable: {e}", backend.name());
                }
            }
        }
        debug!("Using default replacement points");
        default_points()
    }

    /// Persists the point list. The file write is authoritative; the redis
    /// mirror is best-effort and only logged on failure.
    pub async fn save_points(&self, points: &[String]) -> Result<(), CatalogError> {
        self.file.save(points).await?;
        if let Some(remote) = &self.remote {
            if let Err(e) = remote.save(points).await {
                warn!("Catalog mirror to {} failed: {e}", remote.name());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_store(path: PathBuf) -> CatalogStore {
        CatalogStore::new(None, Arc::new(FileCatalog::new(path)))
    }

    #[tokio::test]
    async fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = file_store(dir.path().join("absent.json"));
        let points = store.load_points().await;
        assert_eq!(points, default_points());
    }

    #[tokio::test]
    async fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = file_store(dir.path().join("points.json"));

        let points = vec!["alpha".to_string(), "beta".to_string()];
        store.save_points(&points).await.unwrap();
        assert_eq!(store.load_points().await, points);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_recovered_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.json");
        tokio::fs::write(&path, "not json at all").await.unwrap();

        let store = file_store(path);
        assert_eq!(store.load_points().await, default_points());
    }

    #[tokio::test]
    async fn test_duplicates_and_order_are_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let store = file_store(dir.path().join("points.json"));

        let points = vec!["same".to_string(), "same".to_string(), "other".to_string()];
        store.save_points(&points).await.unwrap();
        assert_eq!(store.load_points().await, points);
    }

    #[tokio::test]
    async fn test_unreachable_remote_falls_through_to_file() {
        struct DownBackend;

        #[async_trait]
        impl CatalogBackend for DownBackend {
            fn name(&self) -> &'static str {
                "down"
            }
            async fn load(&self) -> Result<Option<Vec<String>>, CatalogError> {
                Err(CatalogError::Io(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "down",
                )))
            }
            async fn save(&self, _: &[String]) -> Result<(), CatalogError> {
                Err(CatalogError::Io(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "down",
                )))
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.json");
        tokio::fs::write(&path, r#"["from file"]"#).await.unwrap();

        let store = CatalogStore::new(Some(Arc::new(DownBackend)), Arc::new(FileCatalog::new(path)));
        assert_eq!(store.load_points().await, vec!["from file".to_string()]);

        // Save still succeeds: the file is authoritative, the mirror is
        // best-effort.
        store.save_points(&["x".to_string()]).await.unwrap();
    }
}
