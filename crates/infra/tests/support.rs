//! Shared fixtures for infra integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use aspire_core::{LoginFlow, ProfileStore, Session};
use aspire_infra::{
    HttpAuthApi, HttpClient, HttpPasswordHasher, HttpProfileApi, LocalStore, RestClient,
    SqliteProfileCache,
};
use tempfile::TempDir;
use wiremock::MockServer;

/// On-disk store that lives as long as the fixture.
pub struct TestStorage {
    pub store: LocalStore,
    _temp_dir: TempDir,
}

impl TestStorage {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let store =
            LocalStore::open(temp_dir.path().join("aspire.db")).expect("store should open");
        Self { store, _temp_dir: temp_dir }
    }

    /// A second handle on the same file, as a restarted process would open it.
    pub fn reopen(&self) -> LocalStore {
        let path = self.store.path().expect("on-disk store");
        LocalStore::open(path).expect("store should reopen")
    }
}

impl Default for TestStorage {
    fn default() -> Self {
        Self::new()
    }
}

/// Login flow wired to real adapters against mock servers.
pub fn login_flow(main: &MockServer, hashing: &MockServer, store: LocalStore) -> LoginFlow {
    let http = Arc::new(HttpClient::new().expect("http client"));
    let main_client = RestClient::new(Arc::clone(&http), main.uri());

    let profile_store = Arc::new(ProfileStore::new(
        Arc::new(HttpProfileApi::new(main_client.clone())),
        Arc::new(SqliteProfileCache::new(store)),
    ));
    LoginFlow::new(
        Arc::new(Session::new(profile_store)),
        Arc::new(HttpAuthApi::new(main_client)),
        Arc::new(HttpPasswordHasher::new(RestClient::new(http, hashing.uri()))),
    )
}
