//! HTTP adapter for the remote authentication endpoints.

use crate::session::domain::{AuthGrant, Credentials, Registration};
use crate::session::ports::AuthClient;
use crate::transport::{TransportError, TransportResult};
use async_trait::async_trait;
use serde::Serialize;

/// `reqwest`-backed authentication client.
///
/// Authentication requests never carry a bearer credential; the session is
/// what a successful login establishes.
#[derive(Debug, Clone)]
pub struct HttpAuthClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthClient {
    /// Creates a client rooted at `base_url` (e.g.
    /// `http://localhost:8082/api`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn post<B>(&self, path: &str, body: Option<&B>) -> TransportResult<reqwest::Response>
    where
        B: Serialize + Sync,
    {
        let mut builder = self.client.post(format!("{}{path}", self.base_url));
        if let Some(payload) = body {
            builder = builder.json(payload);
        }
        let response = builder.send().await.map_err(TransportError::network)?;
        if !response.status().is_success() {
            return Err(TransportError::from_response(response).await);
        }
        Ok(response)
    }
}

#[async_trait]
impl AuthClient for HttpAuthClient {
    async fn login(&self, credentials: &Credentials) -> TransportResult<AuthGrant> {
        let response = self.post("/auth/login", Some(credentials)).await?;
        response.json().await.map_err(TransportError::network)
    }

    async fn register(&self, registration: &Registration) -> TransportResult<()> {
        self.post("/auth/register", Some(registration)).await?;
        Ok(())
    }

    async fn logout(&self) -> TransportResult<()> {
        self.post::<Credentials>("/auth/logout", None).await?;
        Ok(())
    }
}
