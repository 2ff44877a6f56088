//! Shared test helpers for `aspire-core` integration tests.
//!
//! In-memory fakes for every port so the store and flow tests can focus on
//! behaviour instead of wiring.

#![allow(dead_code)]

pub mod fakes;

use std::sync::Arc;

use aspire_core::{LoginFlow, ProfileStore, Session};
use aspire_domain::ProfileRecord;

pub use fakes::{FakeAuthApi, FakeHasher, FakeProfileApi, MemoryProfileCache};

/// Profile with just the three fields most scenarios care about.
pub fn profile(student_id: &str, email: &str, time_zone: &str) -> ProfileRecord {
    ProfileRecord {
        student_id: Some(student_id.to_string()),
        email_address: Some(email.to_string()),
        time_zone: Some(time_zone.to_string()),
        ..ProfileRecord::default()
    }
}

/// Store wired to the given fakes.
pub fn store(api: &FakeProfileApi, cache: &MemoryProfileCache) -> Arc<ProfileStore> {
    Arc::new(ProfileStore::new(Arc::new(api.clone()), Arc::new(cache.clone())))
}

/// Everything a login test needs, sharing state with the returned fakes.
pub struct LoginHarness {
    pub api: FakeProfileApi,
    pub cache: MemoryProfileCache,
    pub auth: FakeAuthApi,
    pub hasher: FakeHasher,
    pub flow: LoginFlow,
}

impl LoginHarness {
    pub fn new(auth: FakeAuthApi, hasher: FakeHasher) -> Self {
        let api = FakeProfileApi::default();
        let cache = MemoryProfileCache::default();
        let session = Arc::new(Session::new(store(&api, &cache)));
        let flow = LoginFlow::new(session, Arc::new(auth.clone()), Arc::new(hasher.clone()));
        Self { api, cache, auth, hasher, flow }
    }
}
