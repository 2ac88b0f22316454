use regex::Regex;
use shared_types::{Identity, LoginForm, ValidationError};
use std::sync::OnceLock;

fn repeated_whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s{2,}").expect("whitespace pattern is valid"))
}

/// Collapses runs of whitespace to one space and trims the ends
pub fn normalize_username(raw: &str) -> String {
    repeated_whitespace().replace_all(raw, " ").trim().to_string()
}

pub fn validate_login_form(username: &str, password: &str) -> Result<LoginForm, ValidationError> {
    let username = normalize_username(username);
    if username.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }

    Ok(LoginForm {
        username,
        password: password.to_string(),
    })
}

pub fn validate_password_change(new_password: &str, confirmation: &str) -> Result<(), ValidationError> {
    if new_password != confirmation {
        return Err(ValidationError::PasswordMismatch);
    }
    if new_password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }
    Ok(())
}

pub fn validate_new_login(login: &str) -> Result<String, ValidationError> {
    let login = login.trim();
    if login.is_empty() {
        return Err(ValidationError::EmptyLogin);
    }
    Ok(login.to_string())
}

/// Member id needed by the account endpoints
pub fn require_member_id(identity: Option<&Identity>) -> Result<i64, ValidationError> {
    identity
        .and_then(|identity| identity.member_id)
        .ok_or(ValidationError::InvalidMemberId)
}
