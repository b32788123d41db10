//! Tabula API Server
//!
//! Main entry point for the Tabula backend service.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tabula_api::{AppState, create_router};
use tabula_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tabula=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;
    info!(
        reference_table = %config.engine.reference_table,
        restrict_mismatch_check_to_single_row = config.engine.restrict_mismatch_check_to_single_row,
        max_tables = config.engine.max_tables,
        max_rows = config.engine.max_rows,
        "Engine configured"
    );

    let app = create_router(AppState::new(config.engine));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
