use crate::backend::ChurchBackend;
use crate::error::{ClientError, Result};
use crate::helpers::validation::{require_member_id, validate_new_login, validate_password_change};
use crate::session::Session;
use serde::Serialize;
use tracing::{error, info};

pub const PASSWORD_CHANGED: &str = "Senha alterada com sucesso!";
pub const PASSWORD_CHANGE_FAILED: &str = "Erro ao alterar a senha. Tente novamente.";
pub const USERNAME_CHANGED: &str = "Nome de usuário alterado com sucesso!";
pub const USERNAME_CHANGE_FAILED: &str = "Erro ao alterar o nome de usuário. Tente novamente.";

/// Alert shown after a submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub success: bool,
    pub message: String,
}

impl Feedback {
    fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Change-password and change-username forms
pub struct AccountScreen {
    session: Session,
}

impl AccountScreen {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub async fn change_password(
        &self,
        backend: &dyn ChurchBackend,
        new_password: &str,
        confirmation: &str,
    ) -> Feedback {
        let result = async {
            validate_password_change(new_password, confirmation)?;
            let member_id = require_member_id(self.session.identity())?;
            backend
                .update_password(self.session.token(), member_id, new_password)
                .await?;
            info!("Password updated for member {}", member_id);
            Ok::<_, ClientError>(())
        }
        .await;

        feedback(result, PASSWORD_CHANGED, PASSWORD_CHANGE_FAILED)
    }

    pub async fn change_username(&self, backend: &dyn ChurchBackend, new_login: &str) -> Feedback {
        let result = async {
            let login = validate_new_login(new_login)?;
            let member_id = require_member_id(self.session.identity())?;
            backend
                .update_login(self.session.token(), member_id, &login)
                .await?;
            info!("Login updated for member {}", member_id);
            Ok::<_, ClientError>(())
        }
        .await;

        feedback(result, USERNAME_CHANGED, USERNAME_CHANGE_FAILED)
    }
}

fn feedback(result: Result<()>, success: &str, failure: &str) -> Feedback {
    match result {
        Ok(()) => Feedback::ok(success),
        Err(ClientError::Validation(e)) => Feedback::failed(e.to_string()),
        Err(e) => {
            error!("Account update failed: {}", e);
            Feedback::failed(failure)
        }
    }
}
