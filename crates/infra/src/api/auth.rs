//! Registration and login endpoints of the main server

use async_trait::async_trait;
use aspire_core::AuthApi;
use aspire_domain::constants::{VALIDATE_LOGIN_PATH, VALIDATE_REGISTRATION_PATH};
use aspire_domain::{ApiReply, LoginPayload, RegistrationGrant, Result};
use serde::Serialize;
use tracing::instrument;

use super::client::RestClient;

#[derive(Serialize)]
struct RegistrationRequest<'a> {
    registration_code: &'a str,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email_address: &'a str,
    /// Hash from the hashing service, never the plaintext.
    password: &'a str,
}

/// [`AuthApi`] over `POST /validate/registration` and `POST /validate/login`
pub struct HttpAuthApi {
    client: RestClient,
}

impl HttpAuthApi {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    #[instrument(skip_all)]
    async fn validate_registration(&self, code: &str) -> Result<ApiReply<RegistrationGrant>> {
        let body = RegistrationRequest { registration_code: code };
        Ok(self.client.post_json_reply(VALIDATE_REGISTRATION_PATH, &body).await?)
    }

    #[instrument(skip(self, password_hash))]
    async fn validate_login(
        &self,
        email_address: &str,
        password_hash: &str,
    ) -> Result<ApiReply<LoginPayload>> {
        let body = LoginRequest { email_address, password: password_hash };
        Ok(self.client.post_json_reply(VALIDATE_LOGIN_PATH, &body).await?)
    }
}
