//! Client configuration.
//!
//! Loaded from `histquiz.toml` in the current directory, then
//! `~/.config/histquiz/config.toml`, then built-in defaults, with
//! `HISTQUIZ_*` environment variable overrides applied on top.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cache::DEFAULT_TTL_SECS;

/// Top-level histquiz configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the lessons API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Subject whose lessons are fetched.
    #[serde(default = "default_subject")]
    pub subject: String,
    /// Cache directory; `~/.cache/histquiz` when unset.
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,
    /// Freshness window for the cached lesson list.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
    /// HTTP request timeout.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_api_base_url() -> String {
    "https://quiz-app-1072083660725.us-central1.run.app".to_string()
}
fn default_subject() -> String {
    "History".to_string()
}
fn default_cache_ttl() -> u64 {
    DEFAULT_TTL_SECS
}
fn default_request_timeout() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            subject: default_subject(),
            cache_dir: None,
            cache_ttl_secs: default_cache_ttl(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ClientConfig {
    /// The effective cache directory.
    pub fn cache_dir(&self) -> PathBuf {
        self.cache_dir.clone().unwrap_or_else(default_cache_dir)
    }
}

fn default_cache_dir() -> PathBuf {
    match std::env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(".cache").join("histquiz"),
        Err(_) => PathBuf::from(".histquiz-cache"),
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `histquiz.toml` in the current directory
/// 2. `~/.config/histquiz/config.toml`
///
/// Environment overrides: `HISTQUIZ_API_URL`, `HISTQUIZ_SUBJECT`,
/// `HISTQUIZ_CACHE_DIR`.
pub fn load_config() -> Result<ClientConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<ClientConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("histquiz.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = config_home() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<ClientConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => ClientConfig::default(),
    };

    if let Ok(url) = std::env::var("HISTQUIZ_API_URL") {
        config.api_base_url = url;
    }
    if let Ok(subject) = std::env::var("HISTQUIZ_SUBJECT") {
        config.subject = subject;
    }
    if let Ok(dir) = std::env::var("HISTQUIZ_CACHE_DIR") {
        config.cache_dir = Some(PathBuf::from(dir));
    }

    Ok(config)
}

fn config_home() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("histquiz"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.subject, "History");
        assert_eq!(config.cache_ttl_secs, 3600);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.api_base_url.starts_with("https://"));
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
api_base_url = "http://localhost:8080"
subject = "Geography"
cache_dir = "/tmp/histquiz-test"
cache_ttl_secs = 120
request_timeout_secs = 5
"#;
        let config: ClientConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.subject, "Geography");
        assert_eq!(config.cache_dir, Some(PathBuf::from("/tmp/histquiz-test")));
        assert_eq!(config.cache_ttl_secs, 120);
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: ClientConfig = toml::from_str(r#"subject = "Art""#).unwrap();
        assert_eq!(config.subject, "Art");
        assert_eq!(config.cache_ttl_secs, 3600);
        assert!(config.cache_dir.is_none());
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let result = load_config_from(Some(Path::new("/definitely/not/here.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("histquiz.toml");
        std::fs::write(&path, r#"subject = "Science""#).unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.subject, "Science");
    }

    #[test]
    fn env_overrides_apply() {
        std::env::set_var("HISTQUIZ_API_URL", "http://localhost:9999");
        std::env::set_var("HISTQUIZ_CACHE_DIR", "/tmp/histquiz-env");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("histquiz.toml");
        std::fs::write(&path, r#"api_base_url = "http://from-file""#).unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:9999");
        assert_eq!(config.cache_dir, Some(PathBuf::from("/tmp/histquiz-env")));

        std::env::remove_var("HISTQUIZ_API_URL");
        std::env::remove_var("HISTQUIZ_CACHE_DIR");
    }
}
