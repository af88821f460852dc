//! Adapter implementations of the session ports.

pub mod http;
pub mod memory;

pub use http::HttpAuthClient;
pub use memory::StaticSessionProvider;
