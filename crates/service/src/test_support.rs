#![cfg(test)]
use sea_orm::DatabaseConnection;

/// Migrated in-memory store private to the calling test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_in_memory().await
}
