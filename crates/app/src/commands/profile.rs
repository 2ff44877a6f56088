//! Profile commands: show, settings, avatar upload.

use std::path::Path;

use aspire_core::{PresentationState, ReconcileOutcome};
use aspire_domain::{
    AspireError, FontStyle, ProfileRecord, ProfileUpdateRequest, Result, ThemeMode,
};
use tracing::warn;

use crate::context::AppContext;
use crate::utils::command_helpers::execute_logged;

/// Profile as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub record: ProfileRecord,
    /// Outcome of reconciling the cached copy, `None` when nothing was
    /// cached or the server could not be reached.
    pub reconciled: Option<ReconcileOutcome>,
    pub presentation: PresentationState,
}

/// Settings the user asked to change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsChange {
    pub theme_mode: Option<String>,
    pub font_style: Option<String>,
    pub preferred_language: Option<String>,
    pub preferred_name: Option<String>,
    pub time_zone: Option<String>,
}

impl SettingsChange {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn into_request(self) -> Result<ProfileUpdateRequest> {
        if let Some(theme) = self.theme_mode.as_deref() {
            if ThemeMode::from_wire(theme).is_none() {
                return Err(AspireError::InvalidInput(format!("unknown theme mode: {theme}")));
            }
        }
        if let Some(font) = self.font_style.as_deref() {
            if FontStyle::from_wire(font).is_none() {
                return Err(AspireError::InvalidInput(format!("unknown font style: {font}")));
            }
        }

        Ok(ProfileUpdateRequest {
            theme_mode: self.theme_mode,
            font_style: self.font_style,
            preferred_language: self.preferred_language,
            preferred_name: self.preferred_name,
            time_zone: self.time_zone,
            ..ProfileUpdateRequest::default()
        })
    }
}

/// Restore the cached profile and reconcile it against the server.
///
/// When the server cannot be reached the cached copy is shown as-is.
///
/// # Errors
/// Never fails at present; the `Result` keeps the handler signature uniform.
pub async fn show_profile(ctx: &AppContext) -> Result<ProfileView> {
    execute_logged("profile::show", || async {
        let reconciled = match ctx.session.hydrate().await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(error = %err, "Could not reconcile cached profile; showing local copy");
                let cached = ctx.profiles().get_cached_info().await.unwrap_or_default();
                return Ok(ProfileView {
                    record: cached,
                    reconciled: None,
                    presentation: ctx.session.presentation(),
                });
            }
        };

        Ok(ProfileView {
            record: ctx.profiles().info(),
            reconciled,
            presentation: ctx.session.presentation(),
        })
    })
    .await
}

/// Apply a settings change for the signed-in student.
///
/// # Errors
/// `InvalidInput` for an empty change, an unknown theme or font, or when no
/// student is signed in; otherwise the reconciliation's fetch failure.
pub async fn update_settings(ctx: &AppContext, change: SettingsChange) -> Result<ReconcileOutcome> {
    execute_logged("profile::update_settings", || async {
        if change.is_empty() {
            return Err(AspireError::InvalidInput("no settings to change".into()));
        }
        let request = change.into_request()?;

        ctx.session.hydrate().await?;
        ctx.session.save_settings(request).await
    })
    .await
}

/// Upload a new profile picture and record its URL on the profile.
///
/// Returns `Ok(None)` when the upload itself failed; the old picture is kept.
///
/// # Errors
/// `InvalidInput` when the file has no extension or no student is signed in,
/// `Storage` when the file cannot be read, otherwise the reconciliation's
/// fetch failure.
pub async fn upload_avatar(ctx: &AppContext, image: &Path) -> Result<Option<String>> {
    execute_logged("profile::upload_avatar", || async {
        let extension = image
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| {
                AspireError::InvalidInput(format!("{} has no file extension", image.display()))
            })?;
        let bytes = tokio::fs::read(image).await.map_err(|e| {
            AspireError::Storage(format!("failed to read {}: {e}", image.display()))
        })?;

        ctx.session.hydrate().await?;
        let current = ctx.profiles().info();
        let Some(student_id) = current.student_id() else {
            return Err(AspireError::InvalidInput("no signed-in student".into()));
        };

        let Some(uploaded) =
            ctx.uploader.upload_profile_image(bytes, &extension, student_id).await
        else {
            return Ok(None);
        };

        let request = ProfileUpdateRequest {
            profile_picture_url: Some(uploaded.image_url.clone()),
            ..ProfileUpdateRequest::default()
        };
        ctx.session.save_settings(request).await?;
        Ok(Some(uploaded.image_url))
    })
    .await
}
