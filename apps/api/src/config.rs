use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every value has a local-development default.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Path of the LaTeX template served to and loaded by the session.
    pub template_path: PathBuf,
    /// Path of the local replacement-catalog JSON file.
    pub catalog_path: PathBuf,
    /// Directory of static UI assets.
    pub static_dir: PathBuf,
    /// Remote catalog store. No redis backend when unset.
    pub redis_url: Option<String>,
    pub pdflatex_bin: String,
    pub compile_timeout_secs: u64,
    /// Leading company presentation order for bullet grouping.
    pub company_order: Vec<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            template_path: env_path("TEMPLATE_PATH", "main.tex"),
            catalog_path: env_path("CATALOG_PATH", "replacement-points.json"),
            static_dir: env_path("STATIC_DIR", "public"),
            redis_url: std::env::var("REDIS_URL").ok(),
            pdflatex_bin: std::env::var("PDFLATEX_BIN").unwrap_or_else(|_| "pdflatex".to_string()),
            compile_timeout_secs: std::env::var("COMPILE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("COMPILE_TIMEOUT_SECS must be a number of seconds")?,
            company_order: std::env::var("COMPANY_ORDER")
                .map(|raw| {
                    raw.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn env_path(key: &str, default: &str) -> PathBuf {
    PathBuf::from(std::env::var(key).unwrap_or_else(|_| default.to_string()))
}
