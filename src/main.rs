mod config;
mod error;
mod routes;

use config::ServerConfig;
use error::ServerError;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "wiz server stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    // A missing `.env` is normal outside local development.
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env loaded");
    }

    let config = ServerConfig::from_env()?;
    let app = routes::leptos_app()?;

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, "wiz listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
