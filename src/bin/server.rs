//! Pizza API server: reads settings from the environment (and `.env`), ensures the
//! schema, optionally seeds sample data, and serves the API.

use pizza_api::{app, apply_migrations, connect, seed_sample_data, AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pizza_api=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let pool = connect(&config.database_url, config.max_connections).await?;
    apply_migrations(&pool).await?;
    if config.seed_sample_data {
        seed_sample_data(&pool).await?;
    }

    let router = app(AppState { pool });
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
