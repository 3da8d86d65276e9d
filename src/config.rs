//! Host server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),

    #[error("BIND_HOST must not be empty")]
    EmptyBindHost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_HOST`: default `0.0.0.0`
    ///
    /// # Errors
    ///
    /// Returns `InvalidPort` when `PORT` is not a non-zero `u16`, and
    /// `EmptyBindHost` when `BIND_HOST` is set but blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let bind_host = parse_bind_host(std::env::var("BIND_HOST").ok().as_deref())?;
        Ok(Self { bind_host, port })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_PORT);
    };
    match raw.trim().parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(raw.to_owned())),
    }
}

fn parse_bind_host(raw: Option<&str>) -> Result<String, ConfigError> {
    match raw.map(str::trim) {
        None => Ok(DEFAULT_BIND_HOST.to_owned()),
        Some("") => Err(ConfigError::EmptyBindHost),
        Some(host) => Ok(host.to_owned()),
    }
}
