//! Token builders and an in-memory backend for the unit tests.

use crate::backend::ChurchBackend;
use crate::error::{ClientError, Result};
use crate::session::Session;
use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::{json, Value};
use shared_types::{Notice, RawAmount, TokenResponse, TransactionRecord};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

pub fn encode_segment(value: &Value) -> String {
    URL_SAFE_NO_PAD.encode(serde_json::to_vec(value).unwrap())
}

pub fn token_with_claims(claims: Value) -> String {
    format!(
        "{}.{}.assinatura",
        encode_segment(&json!({"alg": "HS256", "typ": "JWT"})),
        encode_segment(&claims)
    )
}

pub fn token_for(member_id: i64, full_name: &str) -> TokenResponse {
    TokenResponse::bearer(token_with_claims(json!({
        "sub": full_name.to_lowercase(),
        "idMembro": member_id,
        "nomeCompleto": full_name,
        "cpf": "000.000.000-00",
        "cargo": "Membro"
    })))
}

pub fn session_for(member_id: i64, full_name: &str) -> Session {
    Session::new(token_for(member_id, full_name))
}

pub fn record(id: i64, record_type: &str, amount: &str, date: &str) -> TransactionRecord {
    TransactionRecord {
        id: Some(id),
        record_type: record_type.to_string(),
        amount: Some(RawAmount::from(amount)),
        registered_date: date.to_string(),
        description: format!("registro {}", id),
    }
}

pub fn notice(id: i64, member_id: i64) -> Notice {
    Notice {
        id: Some(id),
        description: format!("aviso {}", id),
        event_date: "2024-05-01".to_string(),
        member_id: Some(member_id),
    }
}

#[derive(Default)]
pub struct FakeBackend {
    account: Option<(String, String, TokenResponse)>,
    pub contributions: Vec<TransactionRecord>,
    pub expenses: Vec<TransactionRecord>,
    pub notices: Vec<Notice>,
    pub capitalized: Option<String>,
    pub fail_requests: bool,
    batches: Mutex<VecDeque<(u64, Vec<TransactionRecord>)>>,
    calls: Mutex<Vec<String>>,
    updates: Mutex<Vec<(i64, String)>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(username: &str, password: &str, member_id: i64, full_name: &str) -> Self {
        Self {
            account: Some((
                username.to_string(),
                password.to_string(),
                token_for(member_id, full_name),
            )),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_requests: true,
            ..Self::default()
        }
    }

    /// Queues a contributions response answered after `delay_ms`
    pub fn push_contribution_batch(&self, delay_ms: u64, records: Vec<TransactionRecord>) {
        self.batches.lock().unwrap().push_back((delay_ms, records));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn updates(&self) -> Vec<(i64, String)> {
        self.updates.lock().unwrap().clone()
    }

    fn record_call(&self, name: &str) -> Result<()> {
        self.calls.lock().unwrap().push(name.to_string());
        if self.fail_requests {
            return Err(ClientError::Status {
                status: 503,
                detail: "Service Unavailable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ChurchBackend for FakeBackend {
    async fn issue_token(&self, username: &str, password: &str) -> Result<TokenResponse> {
        self.record_call("issue_token")?;
        match &self.account {
            Some((user, pass, token)) if user == username && pass == password => Ok(token.clone()),
            _ => Err(ClientError::Status {
                status: 401,
                detail: "Incorrect username or password".to_string(),
            }),
        }
    }

    async fn my_contributions(&self, _token: &TokenResponse) -> Result<Vec<TransactionRecord>> {
        self.record_call("my_contributions")?;
        let batch = self.batches.lock().unwrap().pop_front();
        match batch {
            Some((delay_ms, records)) => {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                Ok(records)
            }
            None => Ok(self.contributions.clone()),
        }
    }

    async fn expenses(&self, _token: &TokenResponse) -> Result<Vec<TransactionRecord>> {
        self.record_call("expenses")?;
        Ok(self.expenses.clone())
    }

    async fn active_notices(&self, _token: &TokenResponse) -> Result<Vec<Notice>> {
        self.record_call("active_notices")?;
        Ok(self.notices.clone())
    }

    async fn update_password(
        &self,
        _token: &TokenResponse,
        member_id: i64,
        password: &str,
    ) -> Result<()> {
        self.record_call("update_password")?;
        self.updates
            .lock()
            .unwrap()
            .push((member_id, format!("password={}", password)));
        Ok(())
    }

    async fn update_login(
        &self,
        _token: &TokenResponse,
        member_id: i64,
        login: &str,
    ) -> Result<()> {
        self.record_call("update_login")?;
        self.updates
            .lock()
            .unwrap()
            .push((member_id, format!("login={}", login)));
        Ok(())
    }

    async fn capitalized_name(&self, _token: &TokenResponse, _member_id: i64) -> Result<String> {
        self.record_call("capitalized_name")?;
        self.capitalized.clone().ok_or_else(|| ClientError::Status {
            status: 404,
            detail: "Not Found".to_string(),
        })
    }
}
