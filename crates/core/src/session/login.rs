//! Login and registration flow
//!
//! Exchanges user-supplied credentials (or a registration code) for a seeded
//! profile and a navigation target. Every remote call is made at most once;
//! nothing here retries.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use aspire_domain::{
    AspireError, FontStyle, LoginPayload, ProfileRecord, RegistrationGrant, Result, ThemeMode,
};
use parking_lot::RwLock;
use tracing::{debug, error, info, instrument, warn};

use super::ports::{AuthApi, PasswordHasher};
use super::Session;
use crate::profile::ReconcileOutcome;

/// Which form the welcome screen is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Registration,
}

/// Defaults handed to the profile-completion form after registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFormDefaults {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

impl From<RegistrationGrant> for ProfileFormDefaults {
    fn from(grant: RegistrationGrant) -> Self {
        Self {
            first_name: grant.first_name,
            last_name: grant.last_name,
            email_address: grant.email_address,
        }
    }
}

/// Where the caller should navigate next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Authenticated area.
    Home,
    /// Profile-completion form for a freshly registered student.
    StudentInfoForm(ProfileFormDefaults),
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSession {
    /// Profile as returned by the auth server.
    pub profile: ProfileRecord,
    /// Outcome of seeding the profile store, `None` if seeding failed.
    pub seeded: Option<ReconcileOutcome>,
    /// Whether the server already holds a public key for the student.
    pub has_public_key: bool,
    pub route: Route,
}

/// Why a login attempt was turned down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginRejection {
    /// Email or password was empty; nothing was sent.
    MissingCredentials,
    /// The auth server answered 401.
    InvalidCredentials,
    /// The auth server answered 5xx.
    ServerError { status: u16, reason: String },
    /// Any other non-200 status.
    Unknown { status: u16, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated(AuthenticatedSession),
    Rejected(LoginRejection),
}

/// Why a registration code was turned down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationRejection {
    /// The code was empty; nothing was sent.
    MissingCode,
    /// The validation endpoint answered with a non-200 status.
    InvalidCode { status: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Accepted {
        defaults: ProfileFormDefaults,
        /// Outcome of seeding the partial profile, `None` if seeding failed.
        seeded: Option<ReconcileOutcome>,
        route: Route,
    },
    Rejected(RegistrationRejection),
}

/// Counts one in-flight request for the lifetime of the guard.
struct LoadingGuard<'a>(&'a AtomicUsize);

impl<'a> LoadingGuard<'a> {
    fn engage(in_flight: &'a AtomicUsize) -> Self {
        in_flight.fetch_add(1, Ordering::SeqCst);
        Self(in_flight)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Login / registration flow
pub struct LoginFlow {
    session: Arc<Session>,
    auth: Arc<dyn AuthApi>,
    hasher: Arc<dyn PasswordHasher>,
    mode: RwLock<AuthMode>,
    loading: AtomicUsize,
}

impl LoginFlow {
    pub fn new(
        session: Arc<Session>,
        auth: Arc<dyn AuthApi>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            session,
            auth,
            hasher,
            mode: RwLock::new(AuthMode::default()),
            loading: AtomicUsize::new(0),
        }
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn mode(&self) -> AuthMode {
        *self.mode.read()
    }

    /// Toggle between the login and registration forms.
    pub fn switch_mode(&self) -> AuthMode {
        let mut mode = self.mode.write();
        *mode = match *mode {
            AuthMode::Login => AuthMode::Registration,
            AuthMode::Registration => AuthMode::Login,
        };
        *mode
    }

    /// True while any login or registration request is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst) > 0
    }

    /// Log in with email and password.
    ///
    /// The plaintext password only ever goes to the hashing service; the auth
    /// server receives the hash.
    ///
    /// # Errors
    /// `Hashing` when the hashing service answers anything but 200 (the auth
    /// server is not contacted). Transport failures of either call are logged
    /// and returned as-is.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email_address: &str, password: &str) -> Result<LoginOutcome> {
        let _loading = LoadingGuard::engage(&self.loading);

        if email_address.is_empty() || password.is_empty() {
            error!("Email address and password are required");
            return Ok(LoginOutcome::Rejected(LoginRejection::MissingCredentials));
        }

        info!("Logging in");
        let password_hash = self.hash_password(password).await?;

        let reply = self
            .auth
            .validate_login(email_address, &password_hash)
            .await
            .inspect_err(|err| error!(error = %err, "Error logging in"))?;

        match reply.status {
            200 => {
                let payload = reply.body.ok_or_else(|| {
                    error!("Login response had no body");
                    AspireError::Parse("login response body is missing".into())
                })?;
                Ok(LoginOutcome::Authenticated(self.complete_login(payload).await))
            }
            401 => {
                error!("Invalid email address or password");
                Ok(LoginOutcome::Rejected(LoginRejection::InvalidCredentials))
            }
            status if status >= 500 => {
                error!(status, reason = %reply.reason, "Server error during login");
                Ok(LoginOutcome::Rejected(LoginRejection::ServerError {
                    status,
                    reason: reply.reason,
                }))
            }
            status => {
                error!(status, reason = %reply.reason, "Unknown error during login");
                Ok(LoginOutcome::Rejected(LoginRejection::Unknown { status, reason: reply.reason }))
            }
        }
    }

    /// Redeem a registration code.
    ///
    /// On success the partial profile (names, email, default theme and font)
    /// is offered to the profile store and the caller is routed to the
    /// profile-completion form with the server-supplied defaults.
    ///
    /// # Errors
    /// Transport failures are logged and returned as-is.
    #[instrument(skip(self, code))]
    pub async fn redeem_registration_code(&self, code: &str) -> Result<RegistrationOutcome> {
        let _loading = LoadingGuard::engage(&self.loading);

        if code.is_empty() {
            error!("Registration code is required");
            return Ok(RegistrationOutcome::Rejected(RegistrationRejection::MissingCode));
        }

        let reply = self
            .auth
            .validate_registration(code)
            .await
            .inspect_err(|err| error!(error = %err, "Error registering user"))?;

        if !reply.is_ok() {
            error!(status = reply.status, "Registration code is invalid");
            return Ok(RegistrationOutcome::Rejected(RegistrationRejection::InvalidCode {
                status: reply.status,
            }));
        }

        let grant = reply.body.ok_or_else(|| {
            error!("Registration response had no body");
            AspireError::Parse("registration response body is missing".into())
        })?;

        let seed = ProfileRecord {
            first_name: Some(grant.first_name.clone()),
            last_name: Some(grant.last_name.clone()),
            email_address: Some(grant.email_address.clone()),
            theme_mode: Some(ThemeMode::Light.to_string()),
            font_style: Some(FontStyle::Bauhaus.to_string()),
            ..ProfileRecord::default()
        };
        let seeded = self.seed_profile(seed).await;

        let defaults = ProfileFormDefaults::from(grant);
        Ok(RegistrationOutcome::Accepted {
            route: Route::StudentInfoForm(defaults.clone()),
            defaults,
            seeded,
        })
    }

    async fn hash_password(&self, password: &str) -> Result<String> {
        let reply = self
            .hasher
            .hash_password(password)
            .await
            .inspect_err(|err| error!(error = %err, "Error hashing password"))?;

        if !reply.is_ok() {
            error!(status = reply.status, reason = %reply.reason, "Error hashing password");
            return Err(AspireError::Hashing(format!(
                "hashing service returned {} {}",
                reply.status, reply.reason
            )));
        }

        debug!("Password hashed");
        reply.body.filter(|hash| !hash.is_empty()).ok_or_else(|| {
            error!("Hashing service returned an empty hash");
            AspireError::Hashing("hashing service returned an empty hash".into())
        })
    }

    async fn complete_login(&self, payload: LoginPayload) -> AuthenticatedSession {
        let LoginPayload { profile, public_key } = payload;

        let seeded = self.seed_profile(profile.clone()).await;
        self.session.apply_login_preferences(&profile);

        if profile.student_id().is_none() {
            error!("Student ID not found in login response");
        }

        let has_public_key = public_key.as_deref().is_some_and(|key| !key.is_empty());
        if !has_public_key {
            debug!("No public key registered for student");
        }

        info!(student_id = ?profile.student_id(), "Login successful");
        AuthenticatedSession { profile, seeded, has_public_key, route: Route::Home }
    }

    async fn seed_profile(&self, record: ProfileRecord) -> Option<ReconcileOutcome> {
        match self.session.store().update_info(record).await {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                warn!(error = %err, "Could not seed profile store");
                None
            }
        }
    }
}
