//! Structured logging helpers for command handlers

use std::time::Duration;

use aspire_domain::AspireError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// `command` is a stable identifier such as `"session::login"`; callers must
/// not put credentials in it.
#[inline]
pub fn log_command_execution(
    command: &str,
    elapsed: Duration,
    success: bool,
    error_type: Option<&str>,
) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, error_type, "command_execution_failure");
    }
}

/// Stable label for an error, suitable for log fields.
#[inline]
pub fn error_label(error: &AspireError) -> &'static str {
    error.label()
}
