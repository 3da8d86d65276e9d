//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Flow logic lives in `state` so pages stay thin.

pub mod about;
pub(crate) mod auth_feedback;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod services;
pub mod sign_in;
pub mod sign_up;
