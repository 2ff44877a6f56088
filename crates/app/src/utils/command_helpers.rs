//! Command execution helpers
//!
//! Times each command and logs its outcome so handlers only carry their own
//! logic.

use std::future::Future;
use std::time::Instant;

use aspire_domain::Result;
use tracing::info;

use crate::utils::logging::{error_label, log_command_execution};

/// Run `command_fn`, logging start, duration and outcome under `command_name`.
pub async fn execute_logged<F, Fut, T>(command_name: &str, command_fn: F) -> Result<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    info!(command = command_name, "Executing command");
    let start = Instant::now();

    let result = command_fn().await;

    let error_type = result.as_ref().err().map(error_label);
    log_command_execution(command_name, start.elapsed(), result.is_ok(), error_type);
    result
}
