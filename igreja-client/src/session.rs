use crate::auth::token::decode;
use shared_types::{Identity, TokenResponse};
use tracing::warn;

/// Credential of the logged-in member.
///
/// Holds the bearer token and the identity read from it. The identity is
/// computed once, in [`Session::new`], and has no setter. Sessions live only
/// in memory and are passed explicitly to every route.
#[derive(Clone, PartialEq)]
pub struct Session {
    token: TokenResponse,
    identity: Option<Identity>,
}

impl Session {
    /// A token whose claims cannot be read still yields a session; only the
    /// identity-dependent features are switched off.
    pub fn new(token: TokenResponse) -> Self {
        let identity = match decode(&token.access_token) {
            Ok(identity) => Some(identity),
            Err(e) => {
                warn!("Could not read identity from token: {}", e);
                None
            }
        };

        Self { token, identity }
    }

    pub fn token(&self) -> &TokenResponse {
        &self.token
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn member_id(&self) -> Option<i64> {
        self.identity.as_ref().and_then(|identity| identity.member_id)
    }

    /// Ends the session. Nothing is sent to the backend.
    pub fn logout(self) {
        if let Some(member_id) = self.member_id() {
            tracing::info!("Session of member {} discarded", member_id);
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token_type", &self.token.token_type)
            .field("access_token", &"<redacted>")
            .field("identity", &self.identity)
            .finish()
    }
}

/// Header title of the home screen
pub fn greeting(session: Option<&Session>) -> String {
    match session.and_then(|s| s.identity()) {
        Some(identity) if !identity.full_name.trim().is_empty() => {
            format!("Bem-vindo(a), {}!", identity.full_name.trim())
        }
        _ => "Bem-vindo(a)!".to_string(),
    }
}
