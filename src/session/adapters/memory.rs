//! Static session provider for tests.

use crate::session::ports::SessionProvider;

/// Session provider returning a fixed token, or none.
#[derive(Debug, Clone, Default)]
pub struct StaticSessionProvider {
    token: Option<String>,
}

impl StaticSessionProvider {
    /// Creates a provider for a signed-in session with the given token.
    #[must_use]
    pub fn signed_in(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Creates a provider for a signed-out session.
    #[must_use]
    pub const fn signed_out() -> Self {
        Self { token: None }
    }
}

impl SessionProvider for StaticSessionProvider {
    fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn bearer_token(&self) -> Option<String> {
        self.token.clone()
    }
}
