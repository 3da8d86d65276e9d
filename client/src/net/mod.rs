//! Networking modules for the remote auth/user API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls and classifies failures, and `types` defines the
//! wire schema shared with the backend.

pub mod api;
pub mod types;
