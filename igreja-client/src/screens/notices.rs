use super::state::{FetchMode, ListState};
use crate::backend::ChurchBackend;
use crate::helpers::sequencer::RequestSequencer;
use crate::session::Session;
use reports::resolve_for_member;
use shared_types::Notice;
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

pub const NOTICES_ERROR: &str = "Erro ao buscar os avisos. Tente novamente mais tarde.";

/// Active notices addressed to the logged-in member
pub struct NoticesScreen {
    session: Session,
    state: Mutex<ListState<Vec<Notice>>>,
    sequencer: RequestSequencer,
}

impl NoticesScreen {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            state: Mutex::new(ListState::new()),
            sequencer: RequestSequencer::new(),
        }
    }

    pub async fn load(&self, backend: &dyn ChurchBackend) {
        self.fetch(backend, FetchMode::Initial).await
    }

    pub async fn refresh(&self, backend: &dyn ChurchBackend) {
        self.fetch(backend, FetchMode::Refresh).await
    }

    pub async fn state(&self) -> ListState<Vec<Notice>> {
        self.state.lock().await.clone()
    }

    async fn fetch(&self, backend: &dyn ChurchBackend, mode: FetchMode) {
        let ticket = self.sequencer.next();
        self.state.lock().await.begin(mode);

        // Without a member id no notice can match
        let Some(member_id) = self.session.member_id() else {
            warn!("No member id in session, notices list left empty");
            let mut state = self.state.lock().await;
            if self.sequencer.is_current(ticket) {
                state.succeed(Vec::new());
            }
            return;
        };

        let result = backend.active_notices(self.session.token()).await;

        let mut state = self.state.lock().await;
        if !self.sequencer.is_current(ticket) {
            debug!("Discarding stale notices response");
            return;
        }

        match result {
            Ok(notices) => state.succeed(resolve_for_member(&notices, member_id)),
            Err(e) => {
                error!("Failed to fetch notices: {}", e);
                state.fail(NOTICES_ERROR);
            }
        }
    }
}
