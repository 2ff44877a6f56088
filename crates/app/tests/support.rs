//! Shared fixtures for app integration tests.

#![allow(dead_code)]

use aspire_app::AppContext;
use aspire_core::ProfileCache;
use aspire_domain::{AppConfig, HttpConfig, ProfileRecord, ServerUrls, StorageConfig};
use aspire_infra::SqliteProfileCache;
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::MockServer;

/// Config pointing at mock servers and a database inside `dir`.
pub fn config(main: &MockServer, hashing: &MockServer, dir: &TempDir) -> AppConfig {
    AppConfig {
        servers: ServerUrls { main: main.uri(), hashing: hashing.uri(), chat_uploads: None },
        storage: StorageConfig {
            path: dir.path().join("aspire.db").to_string_lossy().into_owned(),
        },
        http: HttpConfig::default(),
    }
}

pub fn student_json() -> Value {
    json!({
        "student_id": "s-1",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email_address": "a@b.com",
        "theme_mode": "light",
        "font_style": "Roboto",
        "lessons_remaining": 4
    })
}

pub fn student_record() -> ProfileRecord {
    serde_json::from_value(student_json()).expect("fixture record")
}

/// Write `record` to the durable store as a previous run would have.
pub async fn seed_cache(ctx: &AppContext, record: &ProfileRecord) {
    SqliteProfileCache::new(ctx.storage.clone()).save(record).await.expect("seed cache");
}
