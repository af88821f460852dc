//! Session service: login, registration, logout, and snapshot restore.

use crate::session::domain::{Credentials, Registration, SessionDomainError, User};
use crate::session::ports::{AuthClient, SessionProvider};
use crate::storage::{SnapshotError, SnapshotStore};
use crate::transport::TransportError;
use log::warn;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Storage key of the persisted `{user, token}` snapshot.
pub const SESSION_SNAPSHOT_KEY: &str = "user_v1";

/// Service-level errors for session operations.
#[derive(Debug, Clone, Error)]
pub enum SessionServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] SessionDomainError),

    /// The remote auth call failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Reading or writing the session snapshot failed.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Result type for session operations.
pub type SessionServiceResult<T> = Result<T, SessionServiceError>;

/// Persisted session wire format.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSession {
    user: Option<User>,
    token: Option<String>,
}

/// Session identity service.
///
/// State lives behind a lock so the service can be shared with the HTTP
/// transport, which reads the bearer token on every request.
pub struct SessionService<A, P>
where
    A: AuthClient,
    P: SnapshotStore,
{
    auth: Arc<A>,
    snapshots: Arc<P>,
    state: RwLock<StoredSession>,
}

impl<A, P> SessionService<A, P>
where
    A: AuthClient,
    P: SnapshotStore,
{
    /// Creates a signed-out session service.
    #[must_use]
    pub fn new(auth: Arc<A>, snapshots: Arc<P>) -> Self {
        Self {
            auth,
            snapshots,
            state: RwLock::new(StoredSession::default()),
        }
    }

    /// Restores a persisted session, if one exists.
    ///
    /// Missing or malformed snapshots degrade to the signed-out state;
    /// restoration never fails to its caller.
    pub fn init(&self) {
        let restored = self
            .snapshots
            .read(SESSION_SNAPSHOT_KEY)
            .ok()
            .flatten()
            .and_then(|bytes| serde_json::from_slice::<StoredSession>(&bytes).ok());
        self.replace(restored.unwrap_or_default());
    }

    /// Returns the signed-in user, when present.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.state
            .read()
            .map(|state| state.user.clone())
            .unwrap_or_default()
    }

    /// Signs in with the given credentials, establishes the session, and
    /// persists it.
    ///
    /// # Errors
    ///
    /// Returns a transport error propagated from the auth port, or a
    /// snapshot error when the session cannot be persisted.
    pub async fn login(&self, credentials: &Credentials) -> SessionServiceResult<User> {
        let grant = self.auth.login(credentials).await?;
        let user = User::from_login(credentials.email.clone(), grant.name);
        self.replace(StoredSession {
            user: Some(user.clone()),
            token: Some(grant.access_token),
        });
        self.persist()?;
        Ok(user)
    }

    /// Registers a new account.
    ///
    /// Registration does not establish a session; the caller signs in
    /// separately afterwards.
    ///
    /// # Errors
    ///
    /// Returns a transport error propagated from the auth port.
    pub async fn register(&self, registration: &Registration) -> SessionServiceResult<()> {
        self.auth.register(registration).await?;
        Ok(())
    }

    /// Signs out, clearing the identity and removing the persisted
    /// snapshot.
    ///
    /// The remote logout is attempted, but its failure does not keep the
    /// local session alive.
    ///
    /// # Errors
    ///
    /// Returns a snapshot error when the persisted session cannot be
    /// removed.
    pub async fn logout(&self) -> SessionServiceResult<()> {
        if let Err(err) = self.auth.logout().await {
            warn!("remote logout failed, clearing local session anyway: {err}");
        }
        self.replace(StoredSession::default());
        self.snapshots.remove(SESSION_SNAPSHOT_KEY)?;
        Ok(())
    }

    fn persist(&self) -> Result<(), SnapshotError> {
        let bytes = self
            .state
            .read()
            .map_err(|err| SnapshotError::storage(std::io::Error::other(err.to_string())))
            .and_then(|state| serde_json::to_vec(&*state).map_err(SnapshotError::from))?;
        self.snapshots.write(SESSION_SNAPSHOT_KEY, &bytes)
    }

    fn replace(&self, session: StoredSession) {
        if let Ok(mut state) = self.state.write() {
            *state = session;
        }
    }
}

impl<A, P> SessionProvider for SessionService<A, P>
where
    A: AuthClient,
    P: SnapshotStore,
{
    fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .map(|state| state.user.is_some() && state.token.is_some())
            .unwrap_or(false)
    }

    fn bearer_token(&self) -> Option<String> {
        self.state.read().ok().and_then(|state| state.token.clone())
    }
}
