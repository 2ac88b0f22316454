use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Form fields posted to the token endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UpdatePasswordRequest {
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UpdateLoginRequest {
    pub login: String,
}

/// Input problems caught before any request is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Usuário ou senha inválidos")]
    MissingCredentials,

    #[error("As senhas não coincidem.")]
    PasswordMismatch,

    #[error("A nova senha não pode ser vazia.")]
    EmptyPassword,

    #[error("O novo nome de usuário não pode ser vazio.")]
    EmptyLogin,

    #[error("ID do membro inválido.")]
    InvalidMemberId,

    #[error("Mês inválido: {0}")]
    InvalidMonth(u32),
}
