//! Route guard for the protected member area.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` calls `check_access` on every entry with a session read
//! fresh from the store. No authenticated flag is cached between checks.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::Destination;
use crate::state::session::{Session, SessionStore};

/// Whether a protected view may render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Replace the current navigation with this destination.
    Redirect(Destination),
}

/// Allow entry iff the session carries a non-empty token.
pub fn check_access(session: &Session) -> GuardDecision {
    if session.is_authenticated() { GuardDecision::Allow } else { GuardDecision::Redirect(Destination::SignIn) }
}

/// Read the store and decide.
pub fn check_store<S: SessionStore>(store: &S) -> GuardDecision {
    check_access(&store.read())
}
