use crate::error::DbError;
use configuration::DatabaseSettings;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

/// Establishes a connection pool to the PostgreSQL database.
///
/// The pool is created once at startup and shared across the entire
/// application; it is internally synchronized and safe for concurrent use
/// from every request handler.
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool, DbError> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&settings.connection_url())
        .await
        .map_err(DbError::Connection)?;

    Ok(pool)
}

/// Applies the embedded schema migrations.
///
/// Migrations only create what is absent; they never drop or destructively
/// alter existing tables. Run at startup before the server accepts traffic.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DbError> {
    // Use a relative path from the crate root
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
