//! REST client for the remote auth/user API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: the HTTP transport is compiled out and every
//! call reports a transport error, since these endpoints are only meaningful
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Raw responses are reduced to `ApiError` by pure `interpret_*` functions so
//! status handling and body-shape checks are testable without a browser.
//! Callers convert `ApiError` into user-facing messages; nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::types::{LoginResponse, RegisterResponse, SignInForm, SignUpForm, UserRecord};
use crate::config;

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },
    /// No response was received.
    #[error("transport error: {0}")]
    Transport(String),
    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    DataShape(String),
}

impl ApiError {
    /// Human-readable message carried in a rejected response body, if any.
    pub fn server_message(&self) -> Option<String> {
        match self {
            Self::Status { body, .. } => error_message_from_body(body),
            Self::Transport(_) | Self::DataShape(_) => None,
        }
    }
}

/// Status and body text of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Remote operations the auth flow and dashboard depend on.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `POST /api/auth/login`.
    async fn login(&self, form: &SignInForm) -> Result<LoginResponse, ApiError>;

    /// `POST /api/auth/register`.
    async fn register(&self, form: &SignUpForm) -> Result<RegisterResponse, ApiError>;

    /// `GET /api/users` authenticated with a bearer token.
    async fn list_users(&self, token: &str) -> Result<Vec<UserRecord>, ApiError>;
}

/// `AuthApi` backed by browser `fetch`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Client pointed at the build-time configured API host.
    pub fn from_config() -> Self {
        Self::new(config::api_base_url())
    }

    pub fn url(&self, path: &str) -> String {
        config::endpoint(&self.base_url, path)
    }
}

impl Default for HttpAuthApi {
    fn default() -> Self {
        Self::from_config()
    }
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, form: &SignInForm) -> Result<LoginResponse, ApiError> {
        let raw = post_json(&self.url(config::LOGIN_PATH), form).await?;
        interpret_json(raw)
    }

    async fn register(&self, form: &SignUpForm) -> Result<RegisterResponse, ApiError> {
        let raw = post_json(&self.url(config::REGISTER_PATH), form).await?;
        interpret_json(raw)
    }

    async fn list_users(&self, token: &str) -> Result<Vec<UserRecord>, ApiError> {
        let raw = get_with_bearer(&self.url(config::USERS_PATH), token).await?;
        interpret_user_list(raw)
    }
}

async fn post_json<T: serde::Serialize>(url: &str, body: &T) -> Result<RawResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

async fn get_with_bearer(url: &str, token: &str) -> Result<RawResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, token);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
async fn read_response(resp: gloo_net::http::Response) -> Result<RawResponse, ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    Ok(RawResponse { status, body })
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Map a non-2xx response to `ApiError::Status`, otherwise decode the body.
///
/// # Errors
///
/// Returns `Status` for rejected requests and `DataShape` when a successful
/// body does not decode into `T`.
pub fn interpret_json<T: DeserializeOwned>(raw: RawResponse) -> Result<T, ApiError> {
    if !raw.is_success() {
        return Err(ApiError::Status { status: raw.status, body: raw.body });
    }
    serde_json::from_str(&raw.body).map_err(|e| ApiError::DataShape(e.to_string()))
}

/// Decode a user-listing response, requiring a JSON array body.
///
/// # Errors
///
/// Returns `Status` for rejected requests and `DataShape` when the body is
/// not an array of user records.
pub fn interpret_user_list(raw: RawResponse) -> Result<Vec<UserRecord>, ApiError> {
    let value: serde_json::Value = interpret_json(raw)?;
    if !value.is_array() {
        return Err(ApiError::DataShape("expected an array of users".to_owned()));
    }
    serde_json::from_value(value).map_err(|e| ApiError::DataShape(e.to_string()))
}

/// Extract a displayable message from an error body.
///
/// JSON strings and objects with a `message` or `error` string field yield
/// that text; anything else yields the trimmed raw body. Blank bodies yield
/// `None`.
pub fn error_message_from_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    let from_json = match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::String(s)) => Some(s),
        Ok(serde_json::Value::Object(map)) => ["message", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(serde_json::Value::as_str).map(str::to_owned)),
        _ => None,
    };
    match from_json {
        Some(message) if !message.trim().is_empty() => Some(message.trim().to_owned()),
        Some(_) => None,
        None => Some(trimmed.to_owned()),
    }
}
