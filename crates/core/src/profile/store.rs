//! Profile store - single source of truth for the signed-in student's profile
//!
//! The in-memory record is only ever replaced wholesale by a reconciliation
//! (or cleared by [`ProfileStore::remove_info`]). Reconciliations run one at a
//! time: the write gate is held across fetch, compare and persist, so the last
//! call to [`ProfileStore::update_info`] is also the last one to land.

use std::sync::Arc;

use aspire_domain::{
    AspireError, ProfileRecord, ProfileUpdateRequest, Result, ServerProfileRecord,
};
use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use super::ports::{ProfileApi, ProfileCache};
use super::reconcile::{reconcile, ReconcileOutcome};

/// Profile reconciliation store
pub struct ProfileStore {
    api: Arc<dyn ProfileApi>,
    cache: Arc<dyn ProfileCache>,
    current: RwLock<ProfileRecord>,
    write_gate: Mutex<()>,
}

impl ProfileStore {
    /// Create a store with an empty in-memory record.
    pub fn new(api: Arc<dyn ProfileApi>, cache: Arc<dyn ProfileCache>) -> Self {
        Self {
            api,
            cache,
            current: RwLock::new(ProfileRecord::default()),
            write_gate: Mutex::new(()),
        }
    }

    /// Snapshot of the in-memory record.
    pub fn info(&self) -> ProfileRecord {
        self.current.read().clone()
    }

    /// Read the durable local copy without contacting the server.
    ///
    /// Read failures are logged and reported as "nothing cached".
    pub async fn get_cached_info(&self) -> Option<ProfileRecord> {
        match self.cache.load().await {
            Ok(record) => record,
            Err(err) => {
                error!(error = %err, "Failed to read cached profile");
                None
            }
        }
    }

    /// Fetch the server's authoritative record for `student_id`.
    ///
    /// # Errors
    /// `NotFound` for an empty identifier (no request is made) or an unknown
    /// student; `Network`/`Parse` when the server cannot be reached or answers
    /// garbage. Failures are never replaced by local data.
    pub async fn fetch_server_info(&self, student_id: &str) -> Result<ServerProfileRecord> {
        if student_id.trim().is_empty() {
            return Err(AspireError::NotFound("student identifier is missing".into()));
        }

        match self.api.fetch_student(student_id).await {
            Ok(server) => {
                if !server.is_complete() {
                    warn!(
                        student_id,
                        missing = ?server.missing_fields(),
                        "Server profile record is incomplete"
                    );
                }
                Ok(server)
            }
            Err(err) => {
                error!(student_id, error = %err, "Failed to fetch student info");
                Err(err)
            }
        }
    }

    /// Reconcile `proposed` against the server and store the winner.
    ///
    /// The proposal is kept only when it equals the server record exactly;
    /// otherwise the server record replaces it. Both the in-memory record and
    /// the durable copy are overwritten with the winner. A failed durable write
    /// is logged and does not fail the call.
    ///
    /// # Errors
    /// Propagates [`fetch_server_info`](Self::fetch_server_info) failures, in
    /// which case nothing is changed.
    pub async fn update_info(&self, proposed: ProfileRecord) -> Result<ReconcileOutcome> {
        let _gate = self.write_gate.lock().await;

        let student_id = proposed.student_id.clone().unwrap_or_default();
        let server = self.fetch_server_info(&student_id).await?;
        let outcome = reconcile(&proposed, &server);

        match &outcome {
            ReconcileOutcome::Accepted => {
                debug!(student_id = %student_id, "Proposed profile matches server");
            }
            ReconcileOutcome::Rejected { diverging_fields } => {
                info!(
                    student_id = %student_id,
                    diverging = ?diverging_fields,
                    "Proposed profile diverges from server; keeping server record"
                );
            }
        }

        let winner = outcome.winner(proposed, server);
        if let Err(err) = self.cache.save(&winner).await {
            error!(student_id = %student_id, error = %err, "Failed to persist profile");
        }
        *self.current.write() = winner;

        Ok(outcome)
    }

    /// Push a partial update to the server.
    ///
    /// Refuses locally, without a request, when the identifier or email is
    /// empty. Server failures are logged and swallowed; there is no retry.
    pub async fn update_info_on_server(&self, request: &ProfileUpdateRequest) {
        if let Some(field) = request.missing_identity() {
            error!(field, "Refusing to update student info on server: required field is empty");
            return;
        }

        match self.api.update_student(request).await {
            Ok(()) => info!(student_id = %request.student_id, "Student info updated on server"),
            Err(err) => {
                error!(student_id = %request.student_id, error = %err, "Error updating student info");
            }
        }
    }

    /// Delete the durable copy and reset the in-memory record.
    pub async fn remove_info(&self) {
        let _gate = self.write_gate.lock().await;

        if let Err(err) = self.cache.clear().await {
            error!(error = %err, "Failed to remove cached profile");
        }
        *self.current.write() = ProfileRecord::default();
    }

    /// Reload the durable copy and reconcile it against the server.
    ///
    /// Returns `Ok(None)` when nothing is cached.
    ///
    /// # Errors
    /// Propagates the server fetch failure of the reconciliation.
    pub async fn hydrate(&self) -> Result<Option<ReconcileOutcome>> {
        let Some(cached) = self.get_cached_info().await else {
            debug!("No cached profile to hydrate");
            return Ok(None);
        };

        self.update_info(cached).await.map(Some)
    }
}
