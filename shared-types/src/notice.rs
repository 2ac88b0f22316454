use crate::transaction::null_as_default;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Active notice published by the backend for a single member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct Notice {
    #[serde(default, alias = "idAviso")]
    pub id: Option<i64>,
    #[serde(rename = "descricao", default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "dataEvento", default, deserialize_with = "null_as_default")]
    pub event_date: String,
    /// Owner reference only; notices belong to the backend
    #[serde(rename = "idMembro", default)]
    pub member_id: Option<i64>,
}
