//! Sign-in / sign-up / sign-out flow for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages hand raw form input to `AuthController`, which validates locally,
//! issues at most one API call, and writes the session store only after a
//! confirmed success. The outcome tells the page what to display and where to
//! navigate next.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into `AuthOutcome` at this boundary. `ApiError`
//! never reaches a page; it is converted to an `AuthError` carrying the
//! user-facing message.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::{ApiError, AuthApi};
use crate::net::types::{SignInForm, SignUpForm};
use crate::state::session::{Session, SessionRecord, SessionStore};
use crate::util::validation::{ValidationErrors, validate_sign_in, validate_sign_up};

pub const SIGN_IN_TRANSPORT_MESSAGE: &str = "An error occurred. Please try again.";
pub const SIGN_IN_REJECTED_MESSAGE: &str = "Login failed. Please check your credentials.";
pub const SIGN_UP_FAILED_MESSAGE: &str = "Registration failed. Please try again.";
pub const UNEXPECTED_RESPONSE_MESSAGE: &str = "Unexpected response from server. Please try again.";

/// Route a flow asks the caller to move to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    SignIn,
    Dashboard,
}

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Self::SignIn => "/signin",
            Self::Dashboard => "/dashboard",
        }
    }
}

/// Failure after local validation passed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The server refused the credentials or registration.
    #[error("{0}")]
    Rejected(String),
    /// No response was received.
    #[error("{0}")]
    Transport(String),
    /// The server accepted but answered with an unreadable body.
    #[error("{0}")]
    DataShape(String),
}

/// Result of a sign-in or sign-up attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Session written; the caller should navigate to `redirect`.
    Success { session: Session, redirect: Destination },
    /// Local validation failed; nothing was sent.
    Invalid(ValidationErrors),
    /// The request was sent and failed; the session is untouched.
    Failed(AuthError),
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Drives the auth flows against an API and a session store.
#[derive(Clone, Debug)]
pub struct AuthController<A, S> {
    api: A,
    store: S,
}

impl<A: AuthApi, S: SessionStore> AuthController<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self { api, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Validate and submit a sign-in form.
    pub async fn sign_in(&self, form: &SignInForm) -> AuthOutcome {
        let errors = validate_sign_in(form);
        if !errors.is_empty() {
            log::debug!("sign-in blocked by {} validation error(s)", errors.len());
            return AuthOutcome::Invalid(errors);
        }

        match self.api.login(form).await.and_then(|resp| require_token(&resp.token).map(|()| resp)) {
            Ok(resp) => {
                log::info!("sign-in accepted for user {}", resp.id);
                self.store.write(SessionRecord {
                    token: Some(resp.token),
                    user_id: Some(resp.id),
                    email: Some(resp.email),
                    role: resp.role,
                });
                AuthOutcome::Success { session: self.store.read(), redirect: Destination::Dashboard }
            }
            Err(err) => {
                log::warn!("sign-in failed: {err}");
                AuthOutcome::Failed(sign_in_error(&err))
            }
        }
    }

    /// Validate and submit a registration form.
    pub async fn sign_up(&self, form: &SignUpForm) -> AuthOutcome {
        let errors = validate_sign_up(form);
        if !errors.is_empty() {
            log::debug!("sign-up blocked by {} validation error(s)", errors.len());
            return AuthOutcome::Invalid(errors);
        }

        match self.api.register(form).await.and_then(|resp| require_token(&resp.token).map(|()| resp)) {
            Ok(resp) => {
                log::info!("registration accepted for user {}", resp.user_id);
                self.store.write(SessionRecord {
                    token: Some(resp.token),
                    user_id: Some(resp.user_id),
                    email: Some(resp.email),
                    role: Some(resp.role),
                });
                AuthOutcome::Success { session: self.store.read(), redirect: Destination::Dashboard }
            }
            Err(err) => {
                log::warn!("registration failed: {err}");
                AuthOutcome::Failed(sign_up_error(&err))
            }
        }
    }

    /// Drop the session. Always succeeds.
    pub fn sign_out(&self) -> Destination {
        self.store.clear();
        log::info!("signed out");
        Destination::SignIn
    }
}

/// A success body without a usable token cannot open the member area.
fn require_token(token: &str) -> Result<(), ApiError> {
    if token.trim().is_empty() {
        return Err(ApiError::DataShape("response carried no token".to_owned()));
    }
    Ok(())
}

fn sign_in_error(err: &ApiError) -> AuthError {
    match err {
        ApiError::Status { .. } => {
            AuthError::Rejected(err.server_message().unwrap_or_else(|| SIGN_IN_REJECTED_MESSAGE.to_owned()))
        }
        ApiError::Transport(_) => AuthError::Transport(SIGN_IN_TRANSPORT_MESSAGE.to_owned()),
        ApiError::DataShape(_) => AuthError::DataShape(UNEXPECTED_RESPONSE_MESSAGE.to_owned()),
    }
}

fn sign_up_error(err: &ApiError) -> AuthError {
    match err {
        ApiError::Status { .. } => {
            AuthError::Rejected(err.server_message().unwrap_or_else(|| SIGN_UP_FAILED_MESSAGE.to_owned()))
        }
        ApiError::Transport(_) => AuthError::Transport(SIGN_UP_FAILED_MESSAGE.to_owned()),
        ApiError::DataShape(_) => AuthError::DataShape(SIGN_UP_FAILED_MESSAGE.to_owned()),
    }
}
