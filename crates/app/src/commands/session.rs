//! Session commands: login, registration code redemption, logout.

use aspire_core::{LoginOutcome, RegistrationOutcome};
use aspire_domain::Result;

use crate::context::AppContext;
use crate::utils::command_helpers::execute_logged;

/// Sign in with email and password.
///
/// # Errors
/// `Hashing` when the hashing service refuses the password, or the transport
/// failure of either server.
pub async fn login(ctx: &AppContext, email_address: &str, password: &str) -> Result<LoginOutcome> {
    execute_logged("session::login", || ctx.login.login(email_address, password)).await
}

/// Redeem a registration code.
///
/// # Errors
/// Transport failure of the main server.
pub async fn redeem_code(ctx: &AppContext, code: &str) -> Result<RegistrationOutcome> {
    execute_logged("session::redeem_code", || ctx.login.redeem_registration_code(code)).await
}

/// Drop the cached profile and reset presentation.
///
/// # Errors
/// Never fails; cache removal errors are logged by the profile store.
pub async fn logout(ctx: &AppContext) -> Result<()> {
    execute_logged("session::logout", || async {
        ctx.session.logout().await;
        Ok(())
    })
    .await
}
