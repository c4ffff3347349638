use std::time::Duration;

use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// Lifetime for the single in-memory connection; replacing it would drop every row.
const IN_MEMORY_LIFETIME: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Idle timeout and max lifetime for pooled connections.
pub fn pool_lifetimes(cfg: &DatabaseConfig) -> (Duration, Duration) {
    if cfg.is_in_memory() {
        return (IN_MEMORY_LIFETIME, IN_MEMORY_LIFETIME);
    }
    (Duration::from_secs(cfg.idle_timeout_secs), Duration::from_secs(cfg.max_lifetime_secs))
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let (idle, lifetime) = pool_lifetimes(cfg);
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(idle)
        .max_lifetime(lifetime)
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opt).await?;
    info!(in_memory = cfg.is_in_memory(), max_connections = cfg.max_connections, "database connected");
    Ok(db)
}

/// Open the store and bring the schema up to date.
pub async fn init(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(cfg).await?;
    migration::Migrator::up(&db, None).await?;
    info!("database migrations applied");
    Ok(db)
}

/// Fresh, migrated in-memory store. Each call is an independent database.
pub async fn connect_in_memory() -> anyhow::Result<DatabaseConnection> {
    init(&DatabaseConfig::in_memory()).await
}
