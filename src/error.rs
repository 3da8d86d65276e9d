//! Startup errors for the host binary.

use crate::config::ConfigError;

/// Anything that prevents the server from starting or keeps it from serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// `[package.metadata.leptos]` missing or malformed.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
