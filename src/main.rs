use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;

use ticker_portfolio::app;
use ticker_portfolio::config::AppConfig;
use ticker_portfolio::db;
use ticker_portfolio::logging::{init_logging, LoggingConfig};
use ticker_portfolio::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    init_logging(&LoggingConfig::from_env()).map_err(|e| anyhow::anyhow!("logging: {}", e))?;

    let config = AppConfig::from_env();
    config.validate().map_err(anyhow::Error::msg)?;

    let pool = db::connect(&config.database_url)
        .await
        .with_context(|| format!("failed to open database {}", config.database_url))?;

    let state = AppState::from_config(pool, &config);
    let app = app::create_app(state).layer(app::cors_layer(config.cors_origin.as_deref()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Portfolio backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
