//! List/task synchronisation store.
//!
//! This module owns the in-memory mirror of the remote list/task graph and
//! orchestrates every mutation through the remote task service, writing a
//! local snapshot after each successful action. It follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
