//! Wire DTOs for the remote auth/user API.
//!
//! DESIGN
//! ======
//! Response types are lenient where the backend is loose: ids may arrive as
//! JSON numbers or strings, and unknown or missing roles collapse to `User`.
//! Request types double as the transient form credentials and are never
//! persisted.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Account role granted by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Parse a role string, falling back to `User` for anything unrecognized.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("admin") { Self::Admin } else { Self::User }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map_or(Self::User, Self::parse))
    }
}

/// Sign-in form body for `POST /api/auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

/// Sign-up form body for `POST /api/auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SignUpForm {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    /// Numeric ids from the backend are normalized to strings.
    #[serde(alias = "userId", deserialize_with = "deserialize_string_from_scalar")]
    pub id: String,
    pub email: String,
    /// Absent on some backend revisions; callers default it to `User`.
    #[serde(default)]
    pub role: Option<Role>,
}

/// Successful registration payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RegisterResponse {
    pub token: String,
    #[serde(rename = "userId", alias = "id", deserialize_with = "deserialize_string_from_scalar")]
    pub user_id: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

/// A row of the admin user listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: Role,
}

fn deserialize_string_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or number")),
    }
}
