//! Adapter implementations of the list/task store ports.

pub mod http;
pub mod memory;

pub use http::HttpTaskClient;
pub use memory::InMemoryTaskService;
