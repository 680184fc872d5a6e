//! Swap route gateway library
//!
//! Read-only HTTP gateway that turns a token-swap intent into an executable
//! swap plan by fanning out to an external routing oracle. Exposed as a
//! library so integration tests can build the router against a mock oracle.

pub mod api;
pub mod oracle;
pub mod route;
pub mod types;
