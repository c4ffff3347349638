use std::future::Future;

use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Public entry: open the store, build the app and serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    run_until(cfg, shutdown_signal()).await
}

/// Serve until `shutdown` resolves, then drain in-flight requests and close the store.
/// Any failure before the listener is bound aborts startup.
pub async fn run_until<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    common::env::ensure_db_dir(cfg.database.sqlite_file_path())
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;

    let db = models::db::init(&cfg.database)
        .await
        .map_err(|e| StartupError::Runtime(format!("cannot open store: {e}")))?;

    let app: Router = routes::build_router(ServerState::new(db.clone()));

    let bind = cfg.server.bind_addr();
    let listener = TcpListener::bind(&bind)
        .await
        .map_err(|e| StartupError::Runtime(format!("cannot bind {bind}: {e}")))?;
    let addr = listener.local_addr()?;
    info!(%addr, "starting todo server");

    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;

    db.close().await?;
    info!("store closed");
    Ok(())
}
