//! Durable local storage
//!
//! A single SQLite file holding a key/value table. The profile cache stores
//! its JSON blob under [`PROFILE_STORAGE_KEY`](aspire_domain::constants::PROFILE_STORAGE_KEY).

pub mod manager;
pub mod profile_cache;

pub use manager::LocalStore;
pub use profile_cache::SqliteProfileCache;
