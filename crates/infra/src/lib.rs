//! # Aspire Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP transport and REST adapters for the main, hashing and chat-upload
//!   servers
//! - SQLite-backed durable key/value storage
//! - Configuration loading and tracing setup
//!
//! ## Architecture
//! - Implements traits defined in `aspire-core`
//! - Contains all "impure" code (network, disk)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod observability;
pub mod storage;

// Re-export commonly used items
pub use api::{
    ApiError, HttpAuthApi, HttpImageUploader, HttpPasswordHasher, HttpProfileApi, RestClient,
};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use observability::{init_tracing, LogFormat};
pub use storage::{LocalStore, SqliteProfileCache};
