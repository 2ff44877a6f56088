//! Accept-or-discard decision for proposed profile updates
//!
//! A proposed record is accepted only when it is field-for-field identical to
//! the server's copy: the same set of present fields and equal values. Any
//! difference, including a missing or extra field, discards the proposal in
//! favour of the server record. Records are never merged.

use aspire_domain::{ProfileRecord, ServerProfileRecord};

/// Which record won a reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The proposed record matched the server and was kept.
    Accepted,
    /// The server record replaced the proposal.
    Rejected {
        /// Fields whose value differs or that only one side carries.
        diverging_fields: Vec<&'static str>,
    },
}

impl ReconcileOutcome {
    /// True when the proposed record was kept.
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Pick the record that must be stored for this outcome.
    pub fn winner(&self, proposed: ProfileRecord, server: ServerProfileRecord) -> ProfileRecord {
        match self {
            Self::Accepted => proposed,
            Self::Rejected { .. } => server.into_record(),
        }
    }
}

/// Compare `proposed` against the authoritative `server` record.
pub fn reconcile(proposed: &ProfileRecord, server: &ServerProfileRecord) -> ReconcileOutcome {
    let ours = proposed.fields();
    let theirs = server.fields();

    if ours == theirs {
        return ReconcileOutcome::Accepted;
    }

    let mut diverging: Vec<&'static str> = theirs
        .iter()
        .filter(|(name, value)| ours.get(*name) != Some(*value))
        .map(|(name, _)| *name)
        .collect();
    diverging.extend(ours.keys().filter(|name| !theirs.contains_key(*name)).copied());
    diverging.sort_unstable();

    ReconcileOutcome::Rejected { diverging_fields: diverging }
}
