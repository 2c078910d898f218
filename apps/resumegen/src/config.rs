use std::path::PathBuf;

use anyhow::Result;

/// Application configuration loaded from environment variables.
/// Everything has a sensible default for local use.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the resume backend (PDF/DOCX generation, AI rewriting).
    pub api_url: String,
    /// Directory downloads are saved into.
    pub download_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let download_dir = std::env::var("DOWNLOAD_DIR").unwrap_or_else(|_| ".".to_string());

        Ok(Config {
            api_url: std::env::var("API_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            download_dir: PathBuf::from(&download_dir),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
