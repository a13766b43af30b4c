use database::connection::{connect, run_migrations};
use database::repository::DbRepository;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

/// The main entry point for the Libris registry service.
///
/// Startup is strictly sequential: settings, tracing, database pool,
/// migrations, then the HTTP server. Any failure before the server is up is
/// fatal and exits nonzero; a ctrl-c afterwards drains the pool and exits 0.
#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = ?err, "Fatal startup error.");
        eprintln!("fatal: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load environment variables from .env (if present) plus config.toml.
    let settings = configuration::load_settings()?;

    // Initialize the database connection and run migrations.
    let pool = connect(&settings.database).await?;
    tracing::info!("Successfully connected to database");
    run_migrations(&pool).await?;

    let repo = DbRepository::new(pool.clone());

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    web_server::run_server(addr, repo).await?;

    // Graceful shutdown path: release the shared handle before exiting 0.
    pool.close().await;
    tracing::info!("Database connection closed, shutting down.");
    Ok(())
}
