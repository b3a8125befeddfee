use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use api::{CommentBoard, PgUserStore};
use tower_sessions_sqlx_store::PostgresStore;
use tracing_subscriber::EnvFilter;
use web::{AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let settings = Settings::new().context("Failed to load settings")?;

    // Initialize database pool
    let pool = api::db::connect(&settings.database_url, settings.database_requires_tls())
        .await
        .context("Failed to connect to database")?;

    // Run migrations
    api::db::migrate(&pool)
        .await
        .context("Failed to run migrations")?;

    // Create session store
    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .context("Failed to migrate session store")?;

    let state = AppState::new(Arc::new(PgUserStore::new(pool)), CommentBoard::new());
    let router = web::app(state, session_store, &settings);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(
        "Listening on http://localhost:{} (port {})",
        settings.port,
        settings.port
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
