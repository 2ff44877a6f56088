//! # Aspire Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the remote servers and local storage
//! - Profile reconciliation and the profile store
//! - Session lifecycle and the login/registration flow
//! - Image upload naming rules
//!
//! ## Architecture Principles
//! - Only depends on `aspire-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod media;
pub mod profile;
pub mod session;

// Re-export specific items to avoid ambiguity
pub use media::ports::ImageUploader;
pub use profile::ports::{ProfileApi, ProfileCache};
pub use profile::{reconcile, ProfileStore, ReconcileOutcome};
pub use session::ports::{AuthApi, PasswordHasher};
pub use session::{
    AuthMode, AuthenticatedSession, LoginFlow, LoginOutcome, LoginRejection, PresentationState,
    ProfileFormDefaults, RegistrationOutcome, RegistrationRejection, Route, Session,
};
