//! Build-time client configuration.
//!
//! The WASM bundle has no process environment, so the API host is baked in at
//! compile time through `WIZ_API_BASE_URL`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "https://wiz-website-production.up.railway.app";

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const USERS_PATH: &str = "/api/users";

/// API base URL selected at build time.
pub fn api_base_url() -> &'static str {
    resolve_base_url(option_env!("WIZ_API_BASE_URL"))
}

fn resolve_base_url(raw: Option<&'static str>) -> &'static str {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_API_BASE_URL,
    }
}

/// Join an API path onto a base URL with exactly one separating slash.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
