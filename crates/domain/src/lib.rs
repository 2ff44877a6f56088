//! # Aspire Domain
//!
//! Business domain types and models for the Aspire tutoring client.
//!
//! This crate contains:
//! - Profile records (client cache and server-authoritative shapes)
//! - Presentation preferences (theme, font, locale)
//! - Wire payloads exchanged with the auth, hashing and upload servers
//! - Domain error types and Result definitions
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other Aspire crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
