//! Session capability consumed by the list/task store and the transport.

/// Read-only view of the current session.
///
/// The list/task store only asks whether a user is signed in; the HTTP
/// transport additionally forwards the bearer credential with each request.
pub trait SessionProvider: Send + Sync {
    /// Reports whether a user is currently authenticated.
    fn is_authenticated(&self) -> bool;

    /// Returns the bearer token for the current session, when present.
    fn bearer_token(&self) -> Option<String>;
}
