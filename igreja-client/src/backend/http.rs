use super::ChurchBackend;
use crate::config::ServerConfig;
use crate::error::{ClientError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared_types::{
    ErrorResponse, Notice, TokenResponse, TransactionRecord, UpdateLoginRequest,
    UpdatePasswordRequest,
};
use std::time::Duration;
use tracing::{debug, info};

pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(server: &ServerConfig) -> Result<Self> {
        Self::new(&server.base_url, Duration::from_secs(server.timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &TokenResponse,
    ) -> Result<Vec<T>> {
        info!("GET {}", path);

        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(&token.access_token)
            .send()
            .await?;
        let body: Value = check_status(response).await?.json().await?;

        if !body.is_array() {
            return Err(ClientError::InvalidResponse(format!(
                "{} did not return a list",
                path
            )));
        }

        let items: Vec<T> = serde_json::from_value(body)
            .map_err(|e| ClientError::InvalidResponse(format!("{}: {}", path, e)))?;

        debug!("{} returned {} items", path, items.len());
        Ok(items)
    }
}

/// Turns non-2xx responses into [`ClientError::Status`] carrying the backend's detail message
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ErrorResponse>(&text)
        .map(|body| body.message())
        .unwrap_or_else(|_| {
            if text.trim().is_empty() {
                status.canonical_reason().unwrap_or("unknown error").to_string()
            } else {
                text.trim().to_string()
            }
        });

    Err(ClientError::Status {
        status: status.as_u16(),
        detail,
    })
}

#[async_trait]
impl ChurchBackend for HttpBackend {
    async fn issue_token(&self, username: &str, password: &str) -> Result<TokenResponse> {
        info!("POST /auth/token for user {}", username);

        let response = self
            .client
            .post(self.url("/auth/token"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;
        let token: TokenResponse = check_status(response).await?.json().await?;

        Ok(token)
    }

    async fn my_contributions(&self, token: &TokenResponse) -> Result<Vec<TransactionRecord>> {
        self.get_list("/entradas/me/", token).await
    }

    async fn expenses(&self, token: &TokenResponse) -> Result<Vec<TransactionRecord>> {
        self.get_list("/saidas/", token).await
    }

    async fn active_notices(&self, token: &TokenResponse) -> Result<Vec<Notice>> {
        self.get_list("/avisos/ativos/", token).await
    }

    async fn update_password(
        &self,
        token: &TokenResponse,
        member_id: i64,
        password: &str,
    ) -> Result<()> {
        info!("PATCH /usuarios/{} (password)", member_id);

        let response = self
            .client
            .patch(self.url(&format!("/usuarios/{}", member_id)))
            .bearer_auth(&token.access_token)
            .json(&UpdatePasswordRequest {
                password: password.to_string(),
            })
            .send()
            .await?;
        check_status(response).await?;

        Ok(())
    }

    async fn update_login(
        &self,
        token: &TokenResponse,
        member_id: i64,
        login: &str,
    ) -> Result<()> {
        info!("PATCH /usuarios/{} (login)", member_id);

        let response = self
            .client
            .patch(self.url(&format!("/usuarios/{}", member_id)))
            .bearer_auth(&token.access_token)
            .json(&UpdateLoginRequest {
                login: login.to_string(),
            })
            .send()
            .await?;
        check_status(response).await?;

        Ok(())
    }

    async fn capitalized_name(&self, token: &TokenResponse, member_id: i64) -> Result<String> {
        let path = format!("/usuarios/capitalize/{}", member_id);
        info!("GET {}", path);

        let response = self
            .client
            .get(self.url(&path))
            .bearer_auth(&token.access_token)
            .send()
            .await?;
        let text = check_status(response).await?.text().await?;

        Ok(display_name_from_body(&text))
    }
}

/// The endpoint answers with a JSON string; plain text bodies are accepted too
fn display_name_from_body(body: &str) -> String {
    serde_json::from_str::<String>(body).unwrap_or_else(|_| body.trim().to_string())
}
