use serde::{Deserialize, Serialize};

pub mod account;
pub mod credential;
pub mod notice;
pub mod report;
pub mod transaction;

pub use account::{LoginForm, UpdateLoginRequest, UpdatePasswordRequest, ValidationError};
pub use credential::{DecodeError, Identity, TokenResponse};
pub use notice::Notice;
pub use report::{MonthOption, Period, Report, ReportSection};
pub use transaction::{RawAmount, RecordKind, TransactionRecord};

/// Error body returned by the backend (FastAPI style `{"detail": ...}`)
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: serde_json::Value,
}

impl ErrorResponse {
    /// Flattens `detail` into a single line, whether it is a plain message or
    /// a list of validation entries with `msg` fields.
    pub fn message(&self) -> String {
        match &self.detail {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Array(entries) => entries
                .iter()
                .map(|entry| {
                    entry
                        .get("msg")
                        .and_then(|m| m.as_str())
                        .map(str::to_string)
                        .unwrap_or_else(|| entry.to_string())
                })
                .collect::<Vec<_>>()
                .join("; "),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_plain_detail() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"detail": "Incorrect username or password"}"#).unwrap();
        assert_eq!(body.message(), "Incorrect username or password");
    }

    #[test]
    fn test_error_response_validation_list() {
        let body: ErrorResponse = serde_json::from_str(
            r#"{"detail": [{"loc": ["body", "password"], "msg": "field required"}, {"msg": "too short"}]}"#,
        )
        .unwrap();
        assert_eq!(body.message(), "field required; too short");
    }
}
