//! Server entry point: env config, lazy pool, router, listener.

use productos_api::{app, AppConfig, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("productos_api=info".parse()?))
        .init();

    let config = AppConfig::from_env()?;
    let state = AppState {
        pool: config.db.pool(),
    };
    let router = app(state, &config.images_dir);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
