use crate::backend::ChurchBackend;
use crate::navigation::Route;
use crate::session::{greeting, Session};
use reports::has_notice_for_member;
use serde::Serialize;
use tracing::warn;

/// What the home screen shows once loaded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub greeting: String,
    /// Name as formatted by the backend, when it could be fetched
    pub display_name: Option<String>,
    /// Badge on the notices entry
    pub has_notices: bool,
}

pub struct HomeScreen {
    session: Session,
}

impl HomeScreen {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Failures of either request only hide the extra information
    pub async fn load(&self, backend: &dyn ChurchBackend) -> HomeView {
        let mut view = HomeView {
            greeting: greeting(Some(&self.session)),
            display_name: None,
            has_notices: false,
        };

        let Some(member_id) = self.session.member_id() else {
            return view;
        };

        let token = self.session.token();
        let (name, notices) = tokio::join!(
            backend.capitalized_name(token, member_id),
            backend.active_notices(token)
        );

        match name {
            Ok(name) if !name.trim().is_empty() => view.display_name = Some(name),
            Ok(_) => {}
            Err(e) => warn!("Could not fetch display name: {}", e),
        }
        match notices {
            Ok(notices) => view.has_notices = has_notice_for_member(&notices, member_id),
            Err(e) => warn!("Could not fetch notices for badge: {}", e),
        }

        view
    }

    /// Menu entries, each carrying the session forward
    pub fn menu_routes(&self) -> Vec<Route> {
        let session = &self.session;
        vec![
            Route::ContributionYears {
                session: session.clone(),
            },
            Route::ExpenseYears {
                session: session.clone(),
            },
            Route::Notices {
                session: session.clone(),
            },
            Route::ChangeUsername {
                session: session.clone(),
            },
            Route::ChangePassword {
                session: session.clone(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{notice, session_for, FakeBackend};
    use shared_types::TokenResponse;

    #[tokio::test]
    async fn test_home_with_name_and_badge() {
        let mut backend = FakeBackend::new();
        backend.capitalized = Some("Ana Souza".to_string());
        backend.notices = vec![notice(1, 8), notice(2, 7)];

        let view = HomeScreen::new(session_for(7, "ana souza")).load(&backend).await;

        assert_eq!(view.greeting, "Bem-vindo(a), ana souza!");
        assert_eq!(view.display_name.as_deref(), Some("Ana Souza"));
        assert!(view.has_notices);
    }

    #[tokio::test]
    async fn test_home_survives_backend_failure() {
        let backend = FakeBackend::failing();

        let view = HomeScreen::new(session_for(7, "Ana")).load(&backend).await;

        assert_eq!(view.greeting, "Bem-vindo(a), Ana!");
        assert!(view.display_name.is_none());
        assert!(!view.has_notices);
    }

    #[tokio::test]
    async fn test_home_without_identity() {
        let backend = FakeBackend::new();
        let screen = HomeScreen::new(Session::new(TokenResponse::bearer("opaque")));

        let view = screen.load(&backend).await;

        assert_eq!(view.greeting, "Bem-vindo(a)!");
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_menu_routes_carry_session() {
        let screen = HomeScreen::new(session_for(7, "Ana"));
        let routes = screen.menu_routes();
        assert_eq!(routes.len(), 5);
        assert!(routes.iter().all(|r| r.session().and_then(|s| s.member_id()) == Some(7)));
    }
}
