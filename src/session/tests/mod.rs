//! Unit tests for the session component.

mod service_tests;
