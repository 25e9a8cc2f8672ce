// src/config.rs
use reqwest::Url;

use crate::error::{ChatError, Result};

pub const SERVER_URL_ENV: &str = "PDF_CHAT_SERVER_URL";
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Where the backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Absolute base URL, stored without a trailing slash.
    pub server_url: String,
}

impl Config {
    /// Resolve configuration: CLI flag > env var > default.
    pub fn resolve(server_url: Option<String>) -> Result<Self> {
        let raw = server_url
            .or_else(|| std::env::var(SERVER_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        Self::with_server_url(&raw)
    }

    pub fn with_server_url(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let url = Url::parse(trimmed)
            .map_err(|e| ChatError::Config(format!("invalid server URL '{}': {}", trimmed, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ChatError::Config(format!(
                "server URL must be http or https, got '{}'",
                url.scheme()
            )));
        }

        Ok(Self {
            server_url: trimmed.trim_end_matches('/').to_string(),
        })
    }

    pub fn upload_url(&self) -> String {
        format!("{}/upload-pdf/", self.server_url)
    }

    pub fn ask_url(&self, id: impl std::fmt::Display) -> String {
        format!("{}/ask-question/{}", self.server_url, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped() {
        let config = Config::with_server_url("http://localhost:8000/").unwrap();
        assert_eq!(config.server_url, "http://localhost:8000");
        assert_eq!(config.upload_url(), "http://localhost:8000/upload-pdf/");
        assert_eq!(config.ask_url(7), "http://localhost:8000/ask-question/7");
    }

    #[test]
    fn keeps_path_prefix() {
        let config = Config::with_server_url("https://example.com/api").unwrap();
        assert_eq!(config.ask_url(1), "https://example.com/api/ask-question/1");
    }

    #[test]
    fn rejects_garbage_and_other_schemes() {
        assert!(matches!(
            Config::with_server_url("not a url"),
            Err(ChatError::Config(_))
        ));
        assert!(matches!(
            Config::with_server_url("ftp://example.com"),
            Err(ChatError::Config(_))
        ));
    }

    #[test]
    fn flag_wins_over_default() {
        let config = Config::resolve(Some("http://10.0.0.2:9000".to_string())).unwrap();
        assert_eq!(config.server_url, "http://10.0.0.2:9000");
    }
}
