//! Profile reconciliation store

pub mod ports;
pub mod reconcile;
pub mod store;

pub use reconcile::{reconcile, ReconcileOutcome};
pub use store::ProfileStore;
