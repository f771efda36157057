use anyhow::Result;
use fitplan::api::routes::create_routes;
use fitplan::config::AppConfig;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;

    let level: tracing::Level = config.log_level.parse().unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    let app = create_routes();

    let listener = TcpListener::bind(config.server_address()).await?;
    info!(
        "fitplan server starting on http://{} ({})",
        config.server_address(),
        config.environment
    );
    info!("health check available at /health");

    axum::serve(listener, app).await?;

    Ok(())
}
