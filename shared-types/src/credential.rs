use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Response of the token endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl TokenResponse {
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: default_token_type(),
        }
    }

    /// Value for the `Authorization` header
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

/// Identity of the logged-in member, read from the token claims.
///
/// Always derived from a [`TokenResponse`]; it is never edited on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct Identity {
    /// `idMembro` claim. `None` when the claim is missing or not numeric.
    pub member_id: Option<i64>,
    /// `nomeCompleto` claim
    pub full_name: String,
    /// `cpf` claim
    pub national_id: Option<String>,
    /// `cargo` claim
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Malformed token: {reason}")]
    Malformed { reason: String },
}

impl DecodeError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        DecodeError::Malformed {
            reason: reason.into(),
        }
    }
}
