//! Student record endpoints of the main server

use async_trait::async_trait;
use aspire_core::ProfileApi;
use aspire_domain::constants::{STUDENT_ID_QUERY, STUDENT_PATH, STUDENT_UPDATE_PATH};
use aspire_domain::{AspireError, ProfileUpdateRequest, Result, ServerProfileRecord};
use reqwest::Method;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::client::RestClient;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StudentEnvelope {
    student: Option<ServerProfileRecord>,
}

/// [`ProfileApi`] over `GET /student` and `PUT /students/update`
pub struct HttpProfileApi {
    client: RestClient,
}

impl HttpProfileApi {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileApi for HttpProfileApi {
    #[instrument(skip(self))]
    async fn fetch_student(&self, student_id: &str) -> Result<ServerProfileRecord> {
        let envelope: StudentEnvelope =
            self.client.get_json(STUDENT_PATH, &[(STUDENT_ID_QUERY, student_id)]).await?;

        let record = envelope
            .student
            .ok_or_else(|| AspireError::NotFound(format!("student {student_id}")))?;
        debug!(fields = record.fields().len(), "Fetched student record");
        Ok(record)
    }

    #[instrument(skip(self, request), fields(student_id = %request.student_id))]
    async fn update_student(&self, request: &ProfileUpdateRequest) -> Result<()> {
        self.client.send_json(Method::PUT, STUDENT_UPDATE_PATH, request).await?;
        Ok(())
    }
}
