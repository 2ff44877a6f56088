//! In-memory fakes for the core ports
//!
//! Each fake is `Clone` and shares its state through `Arc`, so a test keeps a
//! handle to inspect calls after handing a clone to the code under test.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use aspire_core::{AuthApi, PasswordHasher, ProfileApi, ProfileCache};
use aspire_domain::{
    ApiReply, AspireError, LoginPayload, ProfileRecord, ProfileUpdateRequest, RegistrationGrant,
    Result, ServerProfileRecord,
};
use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;

/// Profile server backed by a map of student id to record.
#[derive(Default, Clone)]
pub struct FakeProfileApi {
    records: Arc<Mutex<HashMap<String, ProfileRecord>>>,
    updates: Arc<Mutex<Vec<ProfileUpdateRequest>>>,
    fetch_calls: Arc<AtomicUsize>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
    offline: Arc<AtomicBool>,
}

impl FakeProfileApi {
    pub fn with_record(self, record: ProfileRecord) -> Self {
        self.put(record);
        self
    }

    /// Insert or replace the server copy of `record`.
    pub fn put(&self, record: ProfileRecord) {
        let id = record.student_id.clone().unwrap_or_default();
        self.records.lock().insert(id, record);
    }

    pub fn record(&self, student_id: &str) -> Option<ProfileRecord> {
        self.records.lock().get(student_id).cloned()
    }

    /// Make every call fail with a network error.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    /// Highest number of fetches observed running at the same time.
    pub fn max_concurrent_fetches(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn updates(&self) -> Vec<ProfileUpdateRequest> {
        self.updates.lock().clone()
    }
}

#[async_trait]
impl ProfileApi for FakeProfileApi {
    async fn fetch_student(&self, student_id: &str) -> Result<ServerProfileRecord> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.offline.load(Ordering::SeqCst) {
            return Err(AspireError::Network("connection refused".into()));
        }
        self.record(student_id)
            .map(ServerProfileRecord::from)
            .ok_or_else(|| AspireError::NotFound(format!("student {student_id}")))
    }

    async fn update_student(&self, request: &ProfileUpdateRequest) -> Result<()> {
        self.updates.lock().push(request.clone());
        if self.offline.load(Ordering::SeqCst) {
            return Err(AspireError::Network("connection refused".into()));
        }
        let current = self.record(&request.student_id).unwrap_or_default();
        self.put(request.apply_to(&current));
        Ok(())
    }
}

/// Durable storage kept in memory.
#[derive(Default, Clone)]
pub struct MemoryProfileCache {
    stored: Arc<Mutex<Option<ProfileRecord>>>,
    broken: Arc<AtomicBool>,
    saves: Arc<AtomicUsize>,
}

impl MemoryProfileCache {
    pub fn with_record(self, record: ProfileRecord) -> Self {
        *self.stored.lock() = Some(record);
        self
    }

    pub fn stored(&self) -> Option<ProfileRecord> {
        self.stored.lock().clone()
    }

    /// Make every operation fail with a storage error.
    pub fn set_broken(&self, broken: bool) {
        self.broken.store(broken, Ordering::SeqCst);
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<()> {
        if self.broken.load(Ordering::SeqCst) {
            Err(AspireError::Storage("disk full".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ProfileCache for MemoryProfileCache {
    async fn load(&self) -> Result<Option<ProfileRecord>> {
        self.check()?;
        Ok(self.stored())
    }

    async fn save(&self, record: &ProfileRecord) -> Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        *self.stored.lock() = Some(record.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.check()?;
        *self.stored.lock() = None;
        Ok(())
    }
}

/// Auth server answering with canned replies.
#[derive(Clone)]
pub struct FakeAuthApi {
    login_reply: Arc<Mutex<Result<ApiReply<LoginPayload>>>>,
    registration_reply: Arc<Mutex<Result<ApiReply<RegistrationGrant>>>>,
    login_calls: Arc<Mutex<Vec<(String, String)>>>,
    registration_calls: Arc<Mutex<Vec<String>>>,
}

impl Default for FakeAuthApi {
    fn default() -> Self {
        Self {
            login_reply: Arc::new(Mutex::new(Ok(ApiReply::status(401, "Unauthorized")))),
            registration_reply: Arc::new(Mutex::new(Ok(ApiReply::status(404, "Not Found")))),
            login_calls: Arc::default(),
            registration_calls: Arc::default(),
        }
    }
}

impl FakeAuthApi {
    pub fn login_reply(self, reply: Result<ApiReply<LoginPayload>>) -> Self {
        *self.login_reply.lock() = reply;
        self
    }

    pub fn registration_reply(self, reply: Result<ApiReply<RegistrationGrant>>) -> Self {
        *self.registration_reply.lock() = reply;
        self
    }

    /// `(email, password hash)` of every login call.
    pub fn login_calls(&self) -> Vec<(String, String)> {
        self.login_calls.lock().clone()
    }

    pub fn registration_calls(&self) -> Vec<String> {
        self.registration_calls.lock().clone()
    }
}

#[async_trait]
impl AuthApi for FakeAuthApi {
    async fn validate_registration(&self, code: &str) -> Result<ApiReply<RegistrationGrant>> {
        self.registration_calls.lock().push(code.to_string());
        self.registration_reply.lock().clone()
    }

    async fn validate_login(
        &self,
        email_address: &str,
        password_hash: &str,
    ) -> Result<ApiReply<LoginPayload>> {
        self.login_calls.lock().push((email_address.to_string(), password_hash.to_string()));
        self.login_reply.lock().clone()
    }
}

/// Hashing service answering with a canned reply.
#[derive(Clone)]
pub struct FakeHasher {
    reply: Arc<Mutex<Result<ApiReply<String>>>>,
    calls: Arc<Mutex<Vec<String>>>,
    gate: Option<Arc<Notify>>,
}

impl Default for FakeHasher {
    fn default() -> Self {
        Self {
            reply: Arc::new(Mutex::new(Ok(ApiReply::ok("hashed-secret".to_string())))),
            calls: Arc::default(),
            gate: None,
        }
    }
}

impl FakeHasher {
    pub fn reply(self, reply: Result<ApiReply<String>>) -> Self {
        *self.reply.lock() = reply;
        self
    }

    /// Hold every call until `gate` is notified.
    pub fn held_by(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl PasswordHasher for FakeHasher {
    async fn hash_password(&self, password: &str) -> Result<ApiReply<String>> {
        self.calls.lock().push(password.to_string());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.reply.lock().clone()
    }
}
