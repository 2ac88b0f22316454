use crate::account::ValidationError;
use crate::transaction::{RecordKind, TransactionRecord};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Time window a report covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Period {
    Year { year: i32 },
    Month { year: i32, month: u32 },
}

impl Period {
    pub fn year(year: i32) -> Self {
        Period::Year { year }
    }

    pub fn month(year: i32, month: u32) -> Result<Self, ValidationError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::InvalidMonth(month));
        }
        Ok(Period::Month { year, month })
    }

    /// Whether a calendar (year, month) falls inside this window
    pub fn matches(&self, year: i32, month: u32) -> bool {
        match *self {
            Period::Year { year: y } => y == year,
            Period::Month { year: y, month: m } => y == year && m == month,
        }
    }
}

/// Records of one category with their total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct ReportSection {
    pub title: String,
    pub items: Vec<TransactionRecord>,
    /// Sum of the item amounts with exactly two fractional digits
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct Report {
    pub kind: RecordKind,
    pub period: Period,
    pub sections: Vec<ReportSection>,
    pub grand_total: String,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}

/// Entry of the month picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct MonthOption {
    pub name: String,
    pub value: u32,
}
