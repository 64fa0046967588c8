//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the single request path (bearer header + 401 hook), `api`
//! wraps each backend endpoint, and `types` defines the shared wire schema.

pub mod api;
pub mod http;
pub mod types;
