//! Port contracts for the list/task store.
//!
//! Ports define infrastructure-agnostic interfaces used by the store.

pub mod remote;

pub use remote::TaskServiceClient;
