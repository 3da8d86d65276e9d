//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `auth`, `dashboard`, `toast`) so
//! pages depend on small focused models that are testable without a browser.

pub mod auth;
pub mod dashboard;
pub mod session;
pub mod toast;
