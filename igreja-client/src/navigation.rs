//! Route stack of the client.
//!
//! Every authenticated route owns the [`Session`] it was opened with, so the
//! credential travels with each transition instead of living in global state.

use crate::session::Session;

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Welcome,
    Login,
    Home { session: Session },
    ContributionYears { session: Session },
    Contributions { session: Session, year: i32 },
    ExpenseYears { session: Session },
    ExpenseMonths { session: Session, year: i32 },
    Expenses { session: Session, year: i32, month: u32 },
    Notices { session: Session },
    ChangeUsername { session: Session },
    ChangePassword { session: Session },
}

impl Route {
    /// Session carried by this route; `None` for the unauthenticated screens
    pub fn session(&self) -> Option<&Session> {
        match self {
            Route::Welcome | Route::Login => None,
            Route::Home { session }
            | Route::ContributionYears { session }
            | Route::Contributions { session, .. }
            | Route::ExpenseYears { session }
            | Route::ExpenseMonths { session, .. }
            | Route::Expenses { session, .. }
            | Route::Notices { session }
            | Route::ChangeUsername { session }
            | Route::ChangePassword { session } => Some(session),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Welcome => "Welcome",
            Route::Login => "Login",
            Route::Home { .. } => "Home",
            Route::ContributionYears { .. } => "ContributionYears",
            Route::Contributions { .. } => "Contributions",
            Route::ExpenseYears { .. } => "ExpenseYears",
            Route::ExpenseMonths { .. } => "ExpenseMonths",
            Route::Expenses { .. } => "Expenses",
            Route::Notices { .. } => "Notices",
            Route::ChangeUsername { .. } => "ChangeUsername",
            Route::ChangePassword { .. } => "ChangePassword",
        }
    }
}

#[derive(Debug)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Welcome],
        }
    }

    pub fn current(&self) -> &Route {
        // The stack is never emptied: go_back keeps the root, logout pushes Login
        &self.stack[self.stack.len() - 1]
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!("Navigating to {}", route.name());
        self.stack.push(route);
    }

    /// Pops the current route. Returns false at the root.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Drops every route, and with them every copy of the session, then shows Login
    pub fn logout(&mut self) {
        let session = self.stack.drain(..).rev().find_map(|route| match route {
            Route::Home { session } => Some(session),
            _ => None,
        });
        if let Some(session) = session {
            session.logout();
        }
        self.stack.push(Route::Login);
    }
}
