use std::net::SocketAddr;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use biztime::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!(max_connections = config.db_max_connections, "database ready");

    let addr = SocketAddr::new(config.host, config.port);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "biztime listening");

    axum::serve(listener, biztime::build_app(pool, config))
        .with_graceful_shutdown(wait_for_shutdown())
        .await?;

    tracing::info!("biztime stopped");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
async fn wait_for_shutdown() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => tracing::info!("received Ctrl+C"),
                    _ = sigterm.recv() => tracing::info!("received SIGTERM"),
                }
                return;
            }
            Err(e) => tracing::warn!("SIGTERM handler unavailable: {e}"),
        }
    }

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Ctrl+C handler unavailable: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("received Ctrl+C");
}
