use anyhow::Context;
use dotenvy::dotenv;
use showcase_backend::config::ServerConfig;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,showcase_backend=debug,tower_http=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = ServerConfig::from_env()?;
    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .with_context(|| format!("failed to create {}", config.upload_dir.display()))?;
    if !config.static_dir.is_dir() {
        tracing::warn!(
            "Static directory {} does not exist, only the API will respond",
            config.static_dir.display()
        );
    }

    let app = showcase_backend::app(&config);
    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("failed to bind port {}", config.port))?;
    tracing::info!("Server starting on http://localhost:{}", config.port);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
