//! Command plumbing shared by the handlers

pub mod command_helpers;
pub mod logging;
