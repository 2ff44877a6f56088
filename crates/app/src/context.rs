//! Application context - dependency injection container

use std::sync::Arc;

use aspire_core::{ImageUploader, LoginFlow, ProfileStore, Session};
use aspire_domain::{AppConfig, Result};
use aspire_infra::{
    HttpAuthApi, HttpClient, HttpImageUploader, HttpPasswordHasher, HttpProfileApi, LocalStore,
    RestClient, SqliteProfileCache,
};
use tracing::info;

/// Type alias for image uploader port trait object
type DynImageUploader = dyn ImageUploader + Send + Sync + 'static;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: AppConfig,
    pub storage: LocalStore,
    pub session: Arc<Session>,
    pub login: Arc<LoginFlow>,
    pub uploader: Arc<DynImageUploader>,
}

impl AppContext {
    /// Build the context, opening the local store at `config.storage.path`.
    ///
    /// # Errors
    /// `Config` when the HTTP client cannot be built, `Storage` when the
    /// local store cannot be opened.
    pub fn new(config: AppConfig) -> Result<Self> {
        let storage = LocalStore::open(&config.storage.path)?;
        Self::with_storage(config, storage)
    }

    /// Build the context over an already opened store.
    ///
    /// # Errors
    /// `Config` when the HTTP client cannot be built.
    pub fn with_storage(config: AppConfig, storage: LocalStore) -> Result<Self> {
        let http = Arc::new(HttpClient::from_config(&config.http)?);

        let main = RestClient::new(Arc::clone(&http), config.servers.main.clone());
        let hashing = RestClient::new(Arc::clone(&http), config.servers.hashing.clone());
        let chat = RestClient::new(http, config.servers.chat_uploads_url().to_string());

        let profiles = Arc::new(ProfileStore::new(
            Arc::new(HttpProfileApi::new(main.clone())),
            Arc::new(SqliteProfileCache::new(storage.clone())),
        ));
        let session = Arc::new(Session::new(profiles));
        let login = Arc::new(LoginFlow::new(
            Arc::clone(&session),
            Arc::new(HttpAuthApi::new(main.clone())),
            Arc::new(HttpPasswordHasher::new(hashing)),
        ));
        let uploader: Arc<DynImageUploader> = Arc::new(HttpImageUploader::new(main, chat));

        info!(
            main = %config.servers.main,
            hashing = %config.servers.hashing,
            storage = ?storage.path(),
            "application context ready"
        );

        Ok(Self { config, storage, session, login, uploader })
    }

    /// Profile store owned by the session.
    pub fn profiles(&self) -> &Arc<ProfileStore> {
        self.session.store()
    }

    /// Verify the local store answers.
    ///
    /// # Errors
    /// `Storage` when the database does not respond.
    pub fn health_check(&self) -> Result<()> {
        self.storage.health_check()
    }
}
