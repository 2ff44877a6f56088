//! Port interfaces for profile management
//!
//! These traits define the boundaries between the profile store and the
//! infrastructure that talks to the profile server and durable storage.

use async_trait::async_trait;
use aspire_domain::{ProfileRecord, ProfileUpdateRequest, Result, ServerProfileRecord};

/// Remote profile endpoint
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// Fetch the authoritative record for `student_id`.
    ///
    /// Fails with `NotFound` when the server has no such student and with
    /// `Network` when it cannot be reached.
    async fn fetch_student(&self, student_id: &str) -> Result<ServerProfileRecord>;

    /// Upsert a partial update on the server.
    async fn update_student(&self, request: &ProfileUpdateRequest) -> Result<()>;
}

/// Durable local copy of the profile record
#[async_trait]
pub trait ProfileCache: Send + Sync {
    /// Read the stored record, `None` if nothing was ever saved.
    async fn load(&self) -> Result<Option<ProfileRecord>>;

    /// Overwrite the stored record.
    async fn save(&self, record: &ProfileRecord) -> Result<()>;

    /// Delete the stored record. Deleting a missing record succeeds.
    async fn clear(&self) -> Result<()>;
}
