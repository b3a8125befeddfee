//! Database connection pool.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;

use crate::error::ApiError;

/// Open a connection pool to `database_url`.
///
/// With `require_tls` the connection is encrypted but the server certificate is not
/// verified, which is what hosted demo databases typically need.
pub async fn connect(database_url: &str, require_tls: bool) -> Result<PgPool, ApiError> {
    let ssl_mode = if require_tls {
        PgSslMode::Require
    } else {
        PgSslMode::Disable
    };
    let options = database_url.parse::<PgConnectOptions>()?.ssl_mode(ssl_mode);

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;
    tracing::info!("Connected to database (tls: {})", require_tls);
    Ok(pool)
}

/// Run the embedded migrations (users table and demo accounts).
pub async fn migrate(pool: &PgPool) -> Result<(), ApiError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
