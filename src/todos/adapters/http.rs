//! HTTP adapter for the remote list and task endpoints.
//!
//! Requests are JSON-encoded and carry an `Authorization: Bearer` header
//! whenever the session provider supplies a credential. Non-2xx responses
//! surface as [`TransportError::Status`] values; connection-level failures
//! as [`TransportError::Network`].

use crate::session::ports::SessionProvider;
use crate::todos::domain::{ListId, ListSummary, Task, TaskDraft, TaskId, TaskPatch};
use crate::todos::ports::TaskServiceClient;
use crate::transport::{TransportError, TransportResult};
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;

/// `reqwest`-backed task service client.
pub struct HttpTaskClient<S>
where
    S: SessionProvider,
{
    client: reqwest::Client,
    base_url: String,
    session: Arc<S>,
}

impl<S> HttpTaskClient<S>
where
    S: SessionProvider,
{
    /// Creates a client rooted at `base_url` (e.g.
    /// `http://localhost:8082/api`), forwarding the session's bearer
    /// credential with each request.
    #[must_use]
    pub fn new(base_url: impl Into<String>, session: Arc<S>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            session,
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{path}", self.base_url));
        match self.session.bearer_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> TransportResult<reqwest::Response> {
        let response = builder.send().await.map_err(TransportError::network)?;
        if !response.status().is_success() {
            return Err(TransportError::from_response(response).await);
        }
        Ok(response)
    }
}

#[async_trait]
impl<S> TaskServiceClient for HttpTaskClient<S>
where
    S: SessionProvider,
{
    async fn fetch_lists(&self) -> TransportResult<Vec<ListSummary>> {
        let response = self.send(self.request(Method::GET, "/tasklists")).await?;
        response.json().await.map_err(TransportError::network)
    }

    async fn create_list(&self, name: &str) -> TransportResult<ListSummary> {
        let body = serde_json::json!({ "name": name });
        let response = self
            .send(self.request(Method::POST, "/tasklists").json(&body))
            .await?;
        response.json().await.map_err(TransportError::network)
    }

    async fn update_list(&self, id: &ListId, name: &str) -> TransportResult<ListSummary> {
        let body = serde_json::json!({ "name": name });
        let response = self
            .send(self.request(Method::PUT, &format!("/tasklists/{id}")).json(&body))
            .await?;
        response.json().await.map_err(TransportError::network)
    }

    async fn delete_list(&self, id: &ListId) -> TransportResult<()> {
        self.send(self.request(Method::DELETE, &format!("/tasklists/{id}")))
            .await?;
        Ok(())
    }

    async fn fetch_tasks(&self, list_id: &ListId) -> TransportResult<Vec<Task>> {
        let response = self
            .send(self.request(Method::GET, &format!("/tasks/tasklist/{list_id}")))
            .await?;
        response.json().await.map_err(TransportError::network)
    }

    async fn create_task(&self, draft: &TaskDraft) -> TransportResult<Task> {
        let response = self
            .send(self.request(Method::POST, "/tasks").json(draft))
            .await?;
        response.json().await.map_err(TransportError::network)
    }

    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> TransportResult<Task> {
        let response = self
            .send(self.request(Method::PUT, &format!("/tasks/{id}")).json(patch))
            .await?;
        response.json().await.map_err(TransportError::network)
    }

    async fn delete_task(&self, id: &TaskId) -> TransportResult<()> {
        self.send(self.request(Method::DELETE, &format!("/tasks/{id}")))
            .await?;
        Ok(())
    }

    async fn toggle_task(&self, id: &TaskId, done: bool) -> TransportResult<()> {
        self.send(self.request(Method::PUT, &format!("/tasks/{id}/{done}")))
            .await?;
        Ok(())
    }
}
