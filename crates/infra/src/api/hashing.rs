//! Password hashing service

use async_trait::async_trait;
use aspire_core::PasswordHasher;
use aspire_domain::constants::HASH_PATH;
use aspire_domain::{ApiReply, Result};
use serde::Serialize;
use tracing::instrument;

use super::client::RestClient;

#[derive(Serialize)]
struct HashRequest<'a> {
    password: &'a str,
}

/// [`PasswordHasher`] over `POST /hash`; the response body is the hash text
pub struct HttpPasswordHasher {
    client: RestClient,
}

impl HttpPasswordHasher {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PasswordHasher for HttpPasswordHasher {
    #[instrument(skip_all)]
    async fn hash_password(&self, password: &str) -> Result<ApiReply<String>> {
        Ok(self.client.post_text_reply(HASH_PATH, &HashRequest { password }).await?)
    }
}
