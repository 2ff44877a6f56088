//! # Aspire App
//!
//! Composition root and command handlers for the `aspire` binary.
//!
//! [`AppContext`] wires the infrastructure adapters into the core services;
//! the [`commands`] module drives the login, registration and profile flows
//! on top of it.

pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

pub use context::AppContext;
