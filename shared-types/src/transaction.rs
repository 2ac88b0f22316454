use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use ts_rs::TS;

/// Separator the backend uses in place of spaces inside category names
pub const CATEGORY_SEPARATOR: char = '_';

/// Which endpoint a record came from. The two kinds are never aggregated together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    /// "entradas": contributions of the logged-in member
    Contribution,
    /// "saídas": expenditures of the organization
    Expense,
}

impl RecordKind {
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Contribution => "Entradas",
            RecordKind::Expense => "Saídas",
        }
    }
}

/// Amount exactly as the backend sent it: a decimal string or a JSON number.
/// Any other JSON value is kept in `Other` and reads as no amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(serde_json::Number),
    Text(String),
    Other(serde_json::Value),
}

impl RawAmount {
    /// Textual form of the amount; empty for `Other`
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            RawAmount::Number(n) => Cow::Owned(n.to_string()),
            RawAmount::Text(s) => Cow::Borrowed(s.as_str()),
            RawAmount::Other(_) => Cow::Borrowed(""),
        }
    }
}

/// Reads an explicit `null` the same way as a missing key
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::Text(value.to_string())
    }
}

/// Contribution or expense record as received from the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct TransactionRecord {
    #[serde(default, alias = "idEntrada", alias = "idSaida")]
    pub id: Option<i64>,
    #[serde(rename = "tipo", default, deserialize_with = "null_as_default")]
    pub record_type: String,
    #[serde(rename = "valor", default)]
    #[ts(type = "string | number | null")]
    pub amount: Option<RawAmount>,
    #[serde(rename = "dataRegistro", default, deserialize_with = "null_as_default")]
    pub registered_date: String,
    #[serde(rename = "descricao", default, deserialize_with = "null_as_default")]
    pub description: String,
}

impl TransactionRecord {
    /// Category name with the separator replaced by spaces
    pub fn normalized_type(&self) -> String {
        normalize_category(&self.record_type)
    }
}

pub fn normalize_category(raw: &str) -> String {
    raw.replace(CATEGORY_SEPARATOR, " ")
}
