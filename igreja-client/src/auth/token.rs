//! Reads the identity claims carried inside a bearer token.
//!
//! The token is a signed claim set (three base64url segments). The signature
//! is not checked here: the backend verifies every request, the client only
//! reads display data from the payload.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use serde_json::Value;
use shared_types::{DecodeError, Identity};

#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(rename = "idMembro", default)]
    member_id: Option<Value>,
    #[serde(rename = "nomeCompleto", default)]
    full_name: Option<Value>,
    #[serde(default)]
    cpf: Option<Value>,
    #[serde(default)]
    cargo: Option<Value>,
}

pub fn decode(bearer_token: &str) -> Result<Identity, DecodeError> {
    let token = bearer_token.trim();
    if token.is_empty() {
        return Err(DecodeError::malformed("token is empty"));
    }

    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(DecodeError::malformed(format!(
            "expected 3 segments, found {}",
            segments.len()
        )));
    }

    let header = decode_segment(segments[0], "header")?;
    if !header.is_object() {
        return Err(DecodeError::malformed("header is not a JSON object"));
    }

    let payload = decode_segment(segments[1], "payload")?;
    if !payload.is_object() {
        return Err(DecodeError::malformed("payload is not a JSON object"));
    }

    let claims: Claims = serde_json::from_value(payload)
        .map_err(|e| DecodeError::malformed(format!("invalid claims: {e}")))?;

    Ok(Identity {
        member_id: claims.member_id.as_ref().and_then(member_id_from_claim),
        full_name: claims.full_name.and_then(text_from_claim).unwrap_or_default(),
        national_id: claims.cpf.and_then(text_from_claim),
        role: claims.cargo.and_then(text_from_claim),
    })
}

fn decode_segment(segment: &str, name: &str) -> Result<Value, DecodeError> {
    if segment.is_empty() {
        return Err(DecodeError::malformed(format!("{name} segment is empty")));
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))
        .map_err(|e| DecodeError::malformed(format!("{name} is not base64url: {e}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| DecodeError::malformed(format!("{name} is not JSON: {e}")))
}

/// `idMembro` is issued as a number, but older tokens carry it as a string
fn member_id_from_claim(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn text_from_claim(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
