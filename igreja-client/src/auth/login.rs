use crate::backend::ChurchBackend;
use crate::error::Result;
use crate::helpers::validation::validate_login_form;
use crate::session::Session;
use tracing::info;

/// Validates the form, asks the backend for a token and opens a session.
///
/// Nothing is sent when the username (after whitespace normalization) or the
/// password is empty.
pub async fn login(backend: &dyn ChurchBackend, username: &str, password: &str) -> Result<Session> {
    let form = validate_login_form(username, password)?;
    let token = backend.issue_token(&form.username, &form.password).await?;

    let session = Session::new(token);
    info!(
        "Logged in as {} (member id {:?})",
        form.username,
        session.member_id()
    );

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::test_support::FakeBackend;
    use shared_types::ValidationError;

    #[tokio::test]
    async fn test_login_opens_session() {
        let backend = FakeBackend::with_account("maria silva", "secret", 42, "Maria Silva");

        let session = login(&backend, "  maria   silva ", "secret").await.unwrap();
        assert_eq!(session.member_id(), Some(42));
        assert_eq!(backend.calls(), vec!["issue_token"]);
    }

    #[tokio::test]
    async fn test_empty_fields_never_reach_backend() {
        let backend = FakeBackend::with_account("maria", "secret", 42, "Maria");

        let err = login(&backend, "   ", "secret").await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::Validation(ValidationError::MissingCredentials)
        ));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_wrong_password_is_unauthorized() {
        let backend = FakeBackend::with_account("maria", "secret", 42, "Maria");

        let err = login(&backend, "maria", "wrong").await.unwrap_err();
        assert!(err.is_unauthorized());
    }
}
