//! Identity and credential value types.

use super::SessionDomainError;
use serde::{Deserialize, Serialize};

/// Signed-in user identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name, when one is known.
    pub name: Option<String>,
    /// Account email address.
    pub email: String,
}

impl User {
    /// Builds the identity established by a login, falling back to the
    /// email local-part when the remote service supplied no display name.
    #[must_use]
    pub fn from_login(email: impl Into<String>, name: Option<String>) -> Self {
        let address = email.into();
        let fallback = address.split('@').next().map(str::to_owned);
        Self {
            name: name.or(fallback),
            email: address,
        }
    }
}

/// Login credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl Credentials {
    /// Creates validated credentials.
    ///
    /// # Errors
    ///
    /// Returns [`SessionDomainError::MissingCredentials`] when either field
    /// is empty.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, SessionDomainError> {
        let email_value = email.into();
        let password_value = password.into();
        if email_value.is_empty() || password_value.is_empty() {
            return Err(SessionDomainError::MissingCredentials);
        }
        Ok(Self {
            email: email_value,
            password: password_value,
        })
    }
}

/// Registration payload for a new account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    /// Login credentials for the new account.
    #[serde(flatten)]
    pub credentials: Credentials,
    /// Display name for the new account.
    pub name: String,
}

/// Successful authentication response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthGrant {
    /// Display name supplied by the remote service, when present.
    #[serde(default)]
    pub name: Option<String>,
    /// Bearer credential for subsequent requests.
    pub access_token: String,
}
