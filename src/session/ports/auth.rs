//! Authentication port for the remote task service.

use crate::session::domain::{AuthGrant, Credentials, Registration};
use crate::transport::TransportResult;
use async_trait::async_trait;

/// Request/response contract for the remote authentication endpoints.
#[async_trait]
pub trait AuthClient: Send + Sync {
    /// Exchanges credentials for a bearer grant.
    async fn login(&self, credentials: &Credentials) -> TransportResult<AuthGrant>;

    /// Registers a new account. Registration does not establish a session.
    async fn register(&self, registration: &Registration) -> TransportResult<()>;

    /// Invalidates the current session remotely.
    async fn logout(&self) -> TransportResult<()>;
}
