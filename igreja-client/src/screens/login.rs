use crate::auth;
use crate::backend::ChurchBackend;
use crate::error::ClientError;
use crate::navigation::{Navigator, Route};
use crate::session::Session;
use shared_types::ValidationError;
use tracing::error;

pub const LOGIN_ERROR: &str = "Erro ao fazer login. Tente novamente mais tarde.";

#[derive(Debug, Default)]
pub struct LoginScreen {
    pub loading: bool,
    /// Message of the error modal, if shown
    pub error: Option<String>,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// On success the Home route is pushed with the new session
    pub async fn submit(
        &mut self,
        backend: &dyn ChurchBackend,
        navigator: &mut Navigator,
        username: &str,
        password: &str,
    ) -> Option<Session> {
        self.loading = true;
        self.error = None;

        let result = auth::login(backend, username, password).await;
        self.loading = false;

        match result {
            Ok(session) => {
                navigator.navigate(Route::Home {
                    session: session.clone(),
                });
                Some(session)
            }
            Err(e) => {
                error!("Login failed: {}", e);
                self.error = Some(login_error_message(&e));
                None
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

fn login_error_message(err: &ClientError) -> String {
    match err {
        ClientError::Validation(e) => e.to_string(),
        e if e.is_unauthorized() => ValidationError::MissingCredentials.to_string(),
        _ => LOGIN_ERROR.to_string(),
    }
}
