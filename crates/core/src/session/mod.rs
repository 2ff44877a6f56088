//! Session lifecycle
//!
//! A [`Session`] is created at start-up, seeded by login or by hydrating the
//! durable profile copy, and torn down by [`Session::logout`]. It owns the
//! profile store and the presentation state so callers pass one object around
//! instead of reaching for process-wide globals.

pub mod login;
pub mod ports;
pub mod presentation;

use std::sync::Arc;

use aspire_domain::{
    AspireError, FontStyle, ProfileRecord, ProfileUpdateRequest, Result, SupportedLocale,
    ThemeMode,
};
pub use login::{
    AuthMode, AuthenticatedSession, LoginFlow, LoginOutcome, LoginRejection, ProfileFormDefaults,
    RegistrationOutcome, RegistrationRejection, Route,
};
use parking_lot::RwLock;
pub use presentation::PresentationState;
use tracing::{error, info};

use crate::profile::{ProfileStore, ReconcileOutcome};

/// Signed-in (or signing-in) user session
pub struct Session {
    store: Arc<ProfileStore>,
    presentation: RwLock<PresentationState>,
}

impl Session {
    pub fn new(store: Arc<ProfileStore>) -> Self {
        Self { store, presentation: RwLock::new(PresentationState::default()) }
    }

    pub fn store(&self) -> &Arc<ProfileStore> {
        &self.store
    }

    /// Current presentation preferences.
    pub fn presentation(&self) -> PresentationState {
        *self.presentation.read()
    }

    pub fn apply_login_preferences(&self, record: &ProfileRecord) {
        self.presentation.write().apply_login_preferences(record);
    }

    pub fn set_theme_mode(&self, theme_mode: ThemeMode) {
        self.presentation.write().theme_mode = theme_mode;
    }

    pub fn set_font_style(&self, font_style: FontStyle) {
        self.presentation.write().font_style = font_style;
    }

    pub fn change_locale(&self, locale: SupportedLocale) {
        self.presentation.write().change_locale(locale);
    }

    /// Restore the profile cached by a previous run.
    ///
    /// Applies the restored record's presentation preferences when the
    /// reconciliation succeeds.
    ///
    /// # Errors
    /// Propagates the server fetch failure of the reconciliation.
    pub async fn hydrate(&self) -> Result<Option<ReconcileOutcome>> {
        let outcome = self.store.hydrate().await?;
        if outcome.is_some() {
            let record = self.store.info();
            self.presentation.write().apply_login_preferences(&record);
        }
        Ok(outcome)
    }

    /// Save a settings change for the signed-in student.
    ///
    /// The identity fields of `changes` are taken from the current record.
    /// Preferences take effect locally at once, the patch is pushed to the
    /// server, and the patched record is then reconciled against the server's
    /// copy. Pushing first means a successful server update makes the
    /// reconciliation accept the new values instead of reverting them.
    ///
    /// # Errors
    /// `InvalidInput` when no student is signed in; otherwise propagates the
    /// reconciliation's fetch failure.
    pub async fn save_settings(
        &self,
        mut changes: ProfileUpdateRequest,
    ) -> Result<ReconcileOutcome> {
        let current = self.store.info();
        let (Some(student_id), Some(email_address)) =
            (current.student_id(), current.email_address())
        else {
            error!("Student ID and email address are required to update settings");
            return Err(AspireError::InvalidInput(
                "no signed-in student to update settings for".into(),
            ));
        };
        changes.student_id = student_id.to_string();
        changes.email_address = email_address.to_string();

        {
            let mut presentation = self.presentation.write();
            if let Some(theme) = changes.theme_mode.as_deref().and_then(ThemeMode::from_wire) {
                presentation.theme_mode = theme;
            }
            if let Some(font) = changes.font_style.as_deref().and_then(FontStyle::from_wire) {
                presentation.font_style = font;
            }
            if let Some(language) = changes.preferred_language.as_deref() {
                presentation.change_locale(SupportedLocale::from_code(language));
            }
        }

        self.store.update_info_on_server(&changes).await;
        self.store.update_info(changes.apply_to(&current)).await
    }

    /// End the session: drop the cached profile and reset presentation.
    pub async fn logout(&self) {
        self.store.remove_info().await;
        *self.presentation.write() = PresentationState::default();
        info!("Session ended");
    }
}
