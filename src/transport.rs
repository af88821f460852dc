//! Shared remote-call failure taxonomy.
//!
//! The store treats the remote task service as an opaque request/response
//! contract. Adapters translate non-2xx responses and connection failures
//! into [`TransportError`] values, which propagate through store actions
//! unchanged; the core never retries or rewraps them.

use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

/// Result type for remote-call operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors surfaced by remote-call adapters.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The remote service answered with a non-2xx status.
    #[error("remote service responded with status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message taken from the response body, or the HTTP status text.
        message: String,
    },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(Arc<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Wraps a connection-level failure.
    pub fn network(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Network(Arc::new(err))
    }

    /// Builds the failure for a non-2xx `response`, taking the message from
    /// the body's `message` field when decodable.
    pub async fn from_response(response: reqwest::Response) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            message: Option<String>,
        }

        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_owned()
            });
        Self::Status {
            status: status.as_u16(),
            message,
        }
    }
}
