//! Port interfaces for the login and registration flow

use async_trait::async_trait;
use aspire_domain::{ApiReply, LoginPayload, RegistrationGrant, Result};

/// Auth endpoints of the main server
///
/// Replies carry the raw status; the flow decides what each status means.
/// `Err` is reserved for transport and decoding failures.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /validate/registration`
    async fn validate_registration(&self, code: &str) -> Result<ApiReply<RegistrationGrant>>;

    /// `POST /validate/login` with the hashed password.
    async fn validate_login(
        &self,
        email_address: &str,
        password_hash: &str,
    ) -> Result<ApiReply<LoginPayload>>;
}

/// Remote password hashing service
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// `POST /hash`; a `200` body is the hash text.
    async fn hash_password(&self, password: &str) -> Result<ApiReply<String>>;
}
