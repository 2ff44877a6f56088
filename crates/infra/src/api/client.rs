//! REST client bound to one base URL
//!
//! Two response styles are offered. The `*_reply` helpers hand back the raw
//! status plus the decoded body (for flows that branch on status codes); the
//! others map any non-success status to an [`ApiError`].

use std::sync::Arc;

use aspire_domain::constants::JSON_CONTENT_TYPE;
use aspire_domain::ApiReply;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::Form;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

use super::errors::ApiError;
use crate::http::HttpClient;

/// JSON-over-HTTP client for a single server
#[derive(Clone)]
pub struct RestClient {
    http: Arc<HttpClient>,
    base_url: String,
}

impl RestClient {
    pub fn new(http: Arc<HttpClient>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` with `query` and decode a JSON body.
    ///
    /// # Errors
    /// Non-success statuses are classified with [`ApiError::from_status`].
    #[instrument(skip(self, query), fields(path = %path))]
    pub async fn get_json<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<R, ApiError> {
        let url = self.url(path);
        let request = self.http.request(Method::GET, &url).query(query);
        let response = self.http.send(request).await?;
        let response = ensure_success(response, &url).await?;
        decode_json(response).await
    }

    /// Send a JSON body with `method` and ignore the response body.
    ///
    /// # Errors
    /// Non-success statuses are classified with [`ApiError::from_status`].
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn send_json<T: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: &T,
    ) -> Result<(), ApiError> {
        let url = self.url(path);
        let request = self.json_request(method, &url, body)?;
        let response = self.http.send(request).await?;
        ensure_success(response, &url).await?;
        Ok(())
    }

    /// POST a JSON body; decode a JSON response only on `200 OK`.
    ///
    /// # Errors
    /// Only transport and decoding failures; every status is returned.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post_json_reply<T, R>(&self, path: &str, body: &T) -> Result<ApiReply<R>, ApiError>
    where
        T: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        let request = self.json_request(Method::POST, &url, body)?;
        let response = self.http.send(request).await?;
        let mut reply = status_reply(&response);
        if reply.is_ok() {
            reply.body = Some(decode_json(response).await?);
        }
        debug!(status = reply.status, "POST reply received");
        Ok(reply)
    }

    /// POST a JSON body; read a plain-text response only on `200 OK`.
    ///
    /// # Errors
    /// Only transport failures; every status is returned.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post_text_reply<T: Serialize + Sync>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<ApiReply<String>, ApiError> {
        let url = self.url(path);
        let request = self.json_request(Method::POST, &url, body)?;
        let response = self.http.send(request).await?;
        let mut reply = status_reply(&response);
        if reply.is_ok() {
            let text = response
                .text()
                .await
                .map_err(|e| ApiError::Network(format!("Failed to read response: {e}")))?;
            reply.body = Some(text);
        }
        debug!(status = reply.status, "POST reply received");
        Ok(reply)
    }

    /// Send a multipart form once and decode a JSON body.
    ///
    /// # Errors
    /// Non-success statuses are classified with [`ApiError::from_status`].
    #[instrument(skip(self, form), fields(path = %path))]
    pub async fn send_multipart<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: Form,
    ) -> Result<R, ApiError> {
        let url = self.url(path);
        let request = self.http.request(method, &url).multipart(form);
        let response = self.http.send(request).await?;
        let response = ensure_success(response, &url).await?;
        decode_json(response).await
    }

    fn json_request<T: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: &T,
    ) -> Result<RequestBuilder, ApiError> {
        let payload = serde_json::to_vec(body)
            .map_err(|e| ApiError::Config(format!("Failed to serialize body: {e}")))?;
        Ok(self.http.request(method, url).header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(payload))
    }
}

fn status_reply<T>(response: &Response) -> ApiReply<T> {
    let status = response.status();
    ApiReply::status(status.as_u16(), status.canonical_reason().unwrap_or_default())
}

async fn ensure_success(response: Response, url: &str) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, url, &body))
}

async fn decode_json<R: DeserializeOwned>(response: Response) -> Result<R, ApiError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::Network(format!("Failed to read response: {e}")))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ApiError::Decode(format!("Failed to parse response: {e}")))
}
