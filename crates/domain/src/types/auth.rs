//! Wire payloads of the registration, login and hashing endpoints

use serde::{Deserialize, Serialize};

use super::profile::ProfileRecord;

/// Status line plus the decoded body of a remote reply.
///
/// Flows branch on the status code themselves, so adapters hand replies back
/// untouched. The body is decoded only for `200 OK`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply<T> {
    pub status: u16,
    pub reason: String,
    pub body: Option<T>,
}

impl<T> ApiReply<T> {
    pub fn ok(body: T) -> Self {
        Self { status: 200, reason: "OK".to_string(), body: Some(body) }
    }

    pub fn status(status: u16, reason: impl Into<String>) -> Self {
        Self { status, reason: reason.into(), body: None }
    }

    pub const fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Body of a successful `POST /validate/registration`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationGrant {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

/// Body of a successful `POST /validate/login`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPayload {
    #[serde(flatten)]
    pub profile: ProfileRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_payload_splits_public_key_from_profile() {
        let payload: LoginPayload = serde_json::from_str(
            r#"{"student_id":"s-1","email_address":"a@b.com","public_key":"pk-1"}"#,
        )
        .unwrap();
        assert_eq!(payload.public_key.as_deref(), Some("pk-1"));
        assert_eq!(payload.profile.student_id(), Some("s-1"));
        assert_eq!(payload.profile.fields().len(), 2);
    }

    #[test]
    fn reply_helpers() {
        assert!(ApiReply::ok(()).is_ok());
        let reply: ApiReply<()> = ApiReply::status(401, "Unauthorized");
        assert!(!reply.is_ok());
        assert!(reply.body.is_none());
    }
}
