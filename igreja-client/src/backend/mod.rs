pub mod http;

pub use http::HttpBackend;

use crate::error::Result;
use async_trait::async_trait;
use shared_types::{Notice, TokenResponse, TransactionRecord};

/// REST surface of the church management backend.
///
/// Every call except [`ChurchBackend::issue_token`] is scoped by the bearer
/// token of the current session.
#[async_trait]
pub trait ChurchBackend: Send + Sync {
    async fn issue_token(&self, username: &str, password: &str) -> Result<TokenResponse>;

    /// `GET /entradas/me/`
    async fn my_contributions(&self, token: &TokenResponse) -> Result<Vec<TransactionRecord>>;

    /// `GET /saidas/`
    async fn expenses(&self, token: &TokenResponse) -> Result<Vec<TransactionRecord>>;

    /// `GET /avisos/ativos/`, notices of every member
    async fn active_notices(&self, token: &TokenResponse) -> Result<Vec<Notice>>;

    async fn update_password(
        &self,
        token: &TokenResponse,
        member_id: i64,
        password: &str,
    ) -> Result<()>;

    async fn update_login(&self, token: &TokenResponse, member_id: i64, login: &str)
        -> Result<()>;

    async fn capitalized_name(&self, token: &TokenResponse, member_id: i64) -> Result<String>;
}
