//! Service orchestration tests for session identity.

use std::sync::Arc;

use crate::session::domain::{AuthGrant, Credentials, Registration, SessionDomainError};
use crate::session::ports::{AuthClient, SessionProvider};
use crate::session::services::{SESSION_SNAPSHOT_KEY, SessionService};
use crate::storage::memory::InMemorySnapshotStore;
use crate::storage::SnapshotStore;
use crate::transport::TransportResult;
use async_trait::async_trait;
use rstest::{fixture, rstest};

/// Auth stub answering every call successfully with a fixed grant.
#[derive(Debug, Clone, Default)]
struct StubAuthClient {
    grant_name: Option<String>,
}

#[async_trait]
impl AuthClient for StubAuthClient {
    async fn login(&self, _credentials: &Credentials) -> TransportResult<AuthGrant> {
        Ok(AuthGrant {
            name: self.grant_name.clone(),
            access_token: "token-123".to_owned(),
        })
    }

    async fn register(&self, _registration: &Registration) -> TransportResult<()> {
        Ok(())
    }

    async fn logout(&self) -> TransportResult<()> {
        Ok(())
    }
}

struct Harness {
    snapshots: Arc<InMemorySnapshotStore>,
    service: SessionService<StubAuthClient, InMemorySnapshotStore>,
}

#[fixture]
fn harness() -> Harness {
    let snapshots = Arc::new(InMemorySnapshotStore::new());
    let service = SessionService::new(
        Arc::new(StubAuthClient::default()),
        Arc::clone(&snapshots),
    );
    Harness { snapshots, service }
}

fn credentials() -> Credentials {
    Credentials::new("alice@example.com", "secret").expect("valid credentials")
}

#[rstest]
fn credentials_require_email_and_password() {
    assert_eq!(
        Credentials::new("", "secret"),
        Err(SessionDomainError::MissingCredentials)
    );
    assert_eq!(
        Credentials::new("alice@example.com", ""),
        Err(SessionDomainError::MissingCredentials)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn login_establishes_and_persists_the_session(harness: Harness) {
    let user = harness
        .service
        .login(&credentials())
        .await
        .expect("login should succeed");

    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.name.as_deref(), Some("alice"));
    assert!(harness.service.is_authenticated());
    assert_eq!(
        harness.service.bearer_token().as_deref(),
        Some("token-123")
    );

    let bytes = harness
        .snapshots
        .read(SESSION_SNAPSHOT_KEY)
        .expect("snapshot read")
        .expect("session persisted");
    let stored: serde_json::Value = serde_json::from_slice(&bytes).expect("valid JSON");
    assert_eq!(stored["token"], serde_json::json!("token-123"));
    assert_eq!(
        stored["user"]["email"],
        serde_json::json!("alice@example.com")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn login_prefers_the_remote_display_name() {
    let snapshots = Arc::new(InMemorySnapshotStore::new());
    let service = SessionService::new(
        Arc::new(StubAuthClient {
            grant_name: Some("Alice Example".to_owned()),
        }),
        snapshots,
    );

    let user = service
        .login(&credentials())
        .await
        .expect("login should succeed");

    assert_eq!(user.name.as_deref(), Some("Alice Example"));
}

#[rstest]
fn init_restores_a_persisted_session(harness: Harness) {
    let payload = serde_json::json!({
        "user": { "name": "alice", "email": "alice@example.com" },
        "token": "restored-token",
    });
    harness
        .snapshots
        .write(
            SESSION_SNAPSHOT_KEY,
            payload.to_string().as_bytes(),
        )
        .expect("seed snapshot");

    harness.service.init();

    assert!(harness.service.is_authenticated());
    assert_eq!(
        harness.service.bearer_token().as_deref(),
        Some("restored-token")
    );
}

#[rstest]
fn init_with_malformed_snapshot_degrades_to_signed_out(harness: Harness) {
    harness
        .snapshots
        .write(SESSION_SNAPSHOT_KEY, b"not json")
        .expect("seed snapshot");

    harness.service.init();

    assert!(!harness.service.is_authenticated());
    assert_eq!(harness.service.bearer_token(), None);
}

#[rstest]
fn init_without_snapshot_stays_signed_out(harness: Harness) {
    harness.service.init();

    assert!(!harness.service.is_authenticated());
    assert_eq!(harness.service.current_user(), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn logout_clears_state_and_removes_the_snapshot(harness: Harness) {
    harness
        .service
        .login(&credentials())
        .await
        .expect("login should succeed");

    harness
        .service
        .logout()
        .await
        .expect("logout should succeed");

    assert!(!harness.service.is_authenticated());
    assert_eq!(harness.service.current_user(), None);
    assert_eq!(
        harness
            .snapshots
            .read(SESSION_SNAPSHOT_KEY)
            .expect("snapshot read"),
        None
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn register_does_not_establish_a_session(harness: Harness) {
    let registration = Registration {
        credentials: credentials(),
        name: "Alice".to_owned(),
    };

    harness
        .service
        .register(&registration)
        .await
        .expect("registration should succeed");

    assert!(!harness.service.is_authenticated());
    assert_eq!(harness.service.bearer_token(), None);
}
