//! Contributions and expenses screens.
//!
//! Both fetch the full list from the backend and group it locally with
//! [`reports::build_report`]. Overlapping fetches are ordered by a
//! [`RequestSequencer`]: only the response of the last issued request lands
//! in the state.

use super::state::{FetchMode, ListState};
use crate::backend::ChurchBackend;
use crate::error::Result;
use crate::helpers::sequencer::RequestSequencer;
use crate::session::Session;
use reports::build_report;
use reports::period::month_label;
use shared_types::{Period, RecordKind, Report, TransactionRecord};
use tokio::sync::Mutex;
use tracing::{debug, error, info};

pub const CONTRIBUTIONS_ERROR: &str = "Erro ao buscar as entradas. Tente novamente mais tarde.";
pub const EXPENSES_ERROR: &str = "Erro ao buscar as saídas. Tente novamente mais tarde.";

pub struct ReportScreen {
    session: Session,
    kind: RecordKind,
    period: Period,
    categories: Option<Vec<String>>,
    state: Mutex<ListState<Option<Report>>>,
    sequencer: RequestSequencer,
}

impl ReportScreen {
    /// Contributions of the logged-in member for one year
    pub fn contributions(session: Session, year: i32, categories: Vec<String>) -> Self {
        Self::with_period(
            session,
            RecordKind::Contribution,
            Period::year(year),
            Some(categories),
        )
    }

    /// Church expenses of one month. Without `categories` every category found
    /// in the period gets a section.
    pub fn expenses(
        session: Session,
        year: i32,
        month: u32,
        categories: Option<Vec<String>>,
    ) -> Result<Self> {
        let period = Period::month(year, month)?;
        Ok(Self::with_period(
            session,
            RecordKind::Expense,
            period,
            categories,
        ))
    }

    fn with_period(
        session: Session,
        kind: RecordKind,
        period: Period,
        categories: Option<Vec<String>>,
    ) -> Self {
        Self {
            session,
            kind,
            period,
            categories,
            state: Mutex::new(ListState::new()),
            sequencer: RequestSequencer::new(),
        }
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn title(&self) -> String {
        match self.period {
            Period::Year { year } => format!("{} de {}", self.kind.label(), year),
            Period::Month { year, month } => match month_label(year, month) {
                Some(label) => format!("{} de {}", self.kind.label(), label),
                None => format!("{} de {:02}/{}", self.kind.label(), month, year),
            },
        }
    }

    pub async fn load(&self, backend: &dyn ChurchBackend) {
        self.fetch(backend, FetchMode::Initial).await
    }

    pub async fn refresh(&self, backend: &dyn ChurchBackend) {
        self.fetch(backend, FetchMode::Refresh).await
    }

    pub async fn state(&self) -> ListState<Option<Report>> {
        self.state.lock().await.clone()
    }

    async fn fetch(&self, backend: &dyn ChurchBackend, mode: FetchMode) {
        let ticket = self.sequencer.next();
        self.state.lock().await.begin(mode);

        let result = self.fetch_records(backend).await;

        let mut state = self.state.lock().await;
        if !self.sequencer.is_current(ticket) {
            debug!("Discarding stale {} response", self.kind.label());
            return;
        }

        match result {
            Ok(records) => {
                let report = build_report(
                    self.kind,
                    &records,
                    self.categories.as_deref(),
                    self.period,
                );
                info!(
                    "{} report: {} sections, {} items",
                    self.kind.label(),
                    report.sections.len(),
                    report.item_count()
                );
                state.succeed(Some(report));
            }
            Err(e) => {
                error!("Failed to fetch {}: {}", self.kind.label(), e);
                state.fail(match self.kind {
                    RecordKind::Contribution => CONTRIBUTIONS_ERROR,
                    RecordKind::Expense => EXPENSES_ERROR,
                });
            }
        }
    }

    async fn fetch_records(&self, backend: &dyn ChurchBackend) -> Result<Vec<TransactionRecord>> {
        let token = self.session.token();
        match self.kind {
            RecordKind::Contribution => backend.my_contributions(token).await,
            RecordKind::Expense => backend.expenses(token).await,
        }
    }
}
