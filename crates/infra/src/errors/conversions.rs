//! Conversions from external infrastructure errors into domain errors.

use aspire_domain::AspireError;
use reqwest::Error as HttpError;
use rusqlite::Error as SqlError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub AspireError);

impl From<InfraError> for AspireError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<AspireError> for InfraError {
    fn from(value: AspireError) -> Self {
        InfraError(value)
    }
}

/// Shorthand for `AspireError::from(InfraError::from(err))`.
pub(crate) fn to_domain<E>(err: E) -> AspireError
where
    InfraError: From<E>,
{
    InfraError::from(err).into()
}

trait IntoAspireError {
    fn into_aspire(self) -> AspireError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → AspireError */
/* -------------------------------------------------------------------------- */

impl IntoAspireError for SqlError {
    fn into_aspire(self) -> AspireError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match err.code {
                    ErrorCode::DatabaseBusy => AspireError::Storage("database is busy".into()),
                    ErrorCode::DatabaseLocked => AspireError::Storage("database is locked".into()),
                    ErrorCode::CannotOpen => {
                        AspireError::Storage(format!("unable to open database: {message}"))
                    }
                    ErrorCode::DiskFull => AspireError::Storage("disk is full".into()),
                    _ => AspireError::Storage(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => AspireError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                AspireError::Storage(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                AspireError::Storage(format!("invalid column type: {ty}"))
            }
            RE::InvalidPath(path) => AspireError::Storage(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            other => AspireError::Storage(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_aspire())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → AspireError */
/* -------------------------------------------------------------------------- */

impl IntoAspireError for HttpError {
    fn into_aspire(self) -> AspireError {
        if self.is_timeout() {
            return AspireError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return AspireError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return AspireError::Parse(format!("failed to decode HTTP response: {self}"));
        }

        if self.is_builder() {
            return AspireError::Config(format!("invalid HTTP request: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => AspireError::Auth(message),
                404 => AspireError::NotFound(message),
                400..=499 => AspireError::InvalidInput(message),
                500..=599 => AspireError::Server(message),
                _ => AspireError::Network(message),
            };
        }

        AspireError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_aspire())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → AspireError */
/* -------------------------------------------------------------------------- */

impl IntoAspireError for JsonError {
    fn into_aspire(self) -> AspireError {
        AspireError::Parse(format!("invalid JSON at line {}: {self}", self.line()))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_aspire())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
