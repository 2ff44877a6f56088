//! Configuration structures
//!
//! Loaded by the infrastructure layer from environment variables or a
//! JSON/TOML file; see `aspire_infra::config`.

use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub servers: ServerUrls,
    pub storage: StorageConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Base URLs of the remote collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerUrls {
    /// Auth/profile server (registration, login, student records, avatars).
    pub main: String,
    /// Password-hashing server.
    pub hashing: String,
    /// Chat uploads server. Falls back to `main` when absent.
    #[serde(default)]
    pub chat_uploads: Option<String>,
}

impl ServerUrls {
    /// Base URL used for chat image uploads.
    pub fn chat_uploads_url(&self) -> &str {
        self.chat_uploads.as_deref().unwrap_or(&self.main)
    }
}

/// Durable local storage settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the SQLite file holding the key/value store.
    pub path: String,
}

/// HTTP transport settings.
///
/// No timeout by default: remote calls rely on library defaults. Requests are
/// always sent once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub user_agent: Option<String>,
}
