//! Command handlers
//!
//! Each handler takes the [`AppContext`](crate::AppContext), runs one flow
//! through the core services and returns its typed outcome; rendering is left
//! to the caller.

pub mod profile;
pub mod session;

pub use profile::{show_profile, update_settings, upload_avatar, ProfileView, SettingsChange};
pub use session::{login, logout, redeem_code};
