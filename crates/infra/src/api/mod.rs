//! REST adapters for the main, hashing and chat-upload servers
//!
//! Every adapter sits on a [`RestClient`] bound to one base URL and shares the
//! process-wide [`HttpClient`](crate::http::HttpClient). Every call is made
//! exactly once.

pub mod auth;
pub mod client;
pub mod errors;
pub mod hashing;
pub mod profile;
pub mod uploads;

pub use auth::HttpAuthApi;
pub use client::RestClient;
pub use errors::{ApiError, ApiErrorCategory};
pub use hashing::HttpPasswordHasher;
pub use profile::HttpProfileApi;
pub use uploads::HttpImageUploader;
