//! Profile cache persisted in the local key/value store

use async_trait::async_trait;
use aspire_core::ProfileCache;
use aspire_domain::constants::PROFILE_STORAGE_KEY;
use aspire_domain::{AspireError, ProfileRecord, Result};
use tokio::task;

use super::manager::LocalStore;
use crate::errors::conversions::to_domain;

/// [`ProfileCache`] keeping the record as a JSON blob under `studentInfo`
pub struct SqliteProfileCache {
    store: LocalStore,
}

impl SqliteProfileCache {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProfileCache for SqliteProfileCache {
    async fn load(&self) -> Result<Option<ProfileRecord>> {
        let store = self.store.clone();

        task::spawn_blocking(move || -> Result<Option<ProfileRecord>> {
            store
                .get(PROFILE_STORAGE_KEY)?
                .map(|blob| serde_json::from_str(&blob).map_err(to_domain))
                .transpose()
        })
        .await
        .map_err(map_join_error)?
    }

    async fn save(&self, record: &ProfileRecord) -> Result<()> {
        let store = self.store.clone();
        let blob = serde_json::to_string(record).map_err(to_domain)?;

        task::spawn_blocking(move || store.set(PROFILE_STORAGE_KEY, &blob))
            .await
            .map_err(map_join_error)?
    }

    async fn clear(&self) -> Result<()> {
        let store = self.store.clone();

        task::spawn_blocking(move || store.remove(PROFILE_STORAGE_KEY).map(|_| ()))
            .await
            .map_err(map_join_error)?
    }
}

fn map_join_error(err: task::JoinError) -> AspireError {
    if err.is_cancelled() {
        AspireError::Internal("storage task cancelled".into())
    } else {
        AspireError::Internal(format!("storage task failed: {err}"))
    }
}
