//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `ASPIRE_MAIN_SERVER_URL`: Auth/profile server base URL (required)
//! - `ASPIRE_HASHING_SERVER_URL`: Password hashing server base URL (required)
//! - `ASPIRE_STORAGE_PATH`: SQLite file for the local store (required)
//! - `ASPIRE_CHAT_UPLOADS_SERVER_URL`: Chat uploads server base URL
//! - `ASPIRE_HTTP_TIMEOUT_SECS`: Client-side request timeout in seconds
//! - `ASPIRE_HTTP_USER_AGENT`: User agent override
//!
//! ## File Locations
//! The loader probes `aspire.{json,toml}` then `config.{json,toml}` in the
//! current directory, its parent, and next to the executable.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use aspire_domain::{AppConfig, AspireError, HttpConfig, Result, ServerUrls, StorageConfig};

const FILE_NAMES: [&str; 4] = ["aspire.json", "aspire.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `AspireError::Config` if neither source yields a valid
/// configuration.
pub fn load() -> Result<AppConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `AspireError::Config` if required variables are missing or
/// numeric values do not parse.
pub fn load_from_env() -> Result<AppConfig> {
    let main = env_var("ASPIRE_MAIN_SERVER_URL")?;
    let hashing = env_var("ASPIRE_HASHING_SERVER_URL")?;
    let storage_path = env_var("ASPIRE_STORAGE_PATH")?;
    let chat_uploads = optional_env("ASPIRE_CHAT_UPLOADS_SERVER_URL");

    let http = HttpConfig {
        timeout_secs: optional_env_parsed("ASPIRE_HTTP_TIMEOUT_SECS")?,
        user_agent: optional_env("ASPIRE_HTTP_USER_AGENT"),
    };

    Ok(AppConfig {
        servers: ServerUrls { main, hashing, chat_uploads },
        storage: StorageConfig { path: storage_path },
        http,
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations (see
/// [`probe_config_paths`]).
///
/// # Errors
/// Returns `AspireError::Config` if the file is missing, unreadable, or not
/// valid JSON/TOML for [`AppConfig`].
pub fn load_from_file(path: Option<PathBuf>) -> Result<AppConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(AspireError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            AspireError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| AspireError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration, detecting the format from the file extension.
fn parse_config(contents: &str, path: &Path) -> Result<AppConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| AspireError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| AspireError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(AspireError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a configuration file
///
/// Returns the first existing candidate, or `None`.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd.clone());
        roots.push(cwd.join(".."));
    }

    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf))
    {
        roots.push(exe_dir);
    }

    probe_in(&roots)
}

fn probe_in(roots: &[PathBuf]) -> Option<PathBuf> {
    roots
        .iter()
        .flat_map(|root| FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| AspireError::Config(format!("Missing required environment variable: {key}")))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn optional_env_parsed<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    optional_env(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| AspireError::Config(format!("Invalid value for {key}: {e}")))
        })
        .transpose()
}
