//! Domain types and models

pub mod auth;
pub mod media;
pub mod preferences;
pub mod profile;

pub use auth::{ApiReply, LoginPayload, RegistrationGrant};
pub use media::{ChatImage, UploadedImage};
pub use preferences::{FontStyle, SupportedLocale, TextDirection, ThemeMode};
pub use profile::{
    FieldValue, ProfileFields, ProfileRecord, ProfileUpdateRequest, ServerProfileRecord,
    PROFILE_FIELD_NAMES,
};
