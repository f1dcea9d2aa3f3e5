use std::time::Instant;

use migration::MigrationCommand;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};
use tracing::{error, info};

use crate::config::db::{connect_options, is_sqlite_memory};
use crate::error::AppError;

/// Connect to the store. Does NOT run any migrations.
pub async fn connect_db(url: &str) -> Result<DatabaseConnection, AppError> {
    let started = Instant::now();
    let conn = Database::connect(connect_options(url)).await.map_err(|e| {
        error!(error = %e, "database connection failed");
        AppError::from(e)
    })?;
    info!(
        backend = ?conn.get_database_backend(),
        in_memory = is_sqlite_memory(url),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "database connected"
    );
    Ok(conn)
}

/// Connect and bring the schema up to date. Single entrypoint for the survey
/// service and the integration tests.
pub async fn bootstrap_db(url: &str) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(url).await?;
    migration::migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::internal(format!("Migration failed: {e}")))?;
    let version = migration::get_latest_migration_version(&conn)
        .await
        .map_err(AppError::from)?;
    info!(version = version.as_deref().unwrap_or("none"), "schema ready");
    Ok(conn)
}

/// Store liveness as reported by the health endpoint.
pub async fn db_status(conn: &DatabaseConnection) -> &'static str {
    match conn.ping().await {
        Ok(()) => "connected",
        Err(_) => "unavailable",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bootstrap_in_memory_store_is_connected_and_seeded() {
        let conn = bootstrap_db("sqlite::memory:").await.unwrap();
        assert_eq!(db_status(&conn).await, "connected");
        assert_eq!(migration::count_applied_migrations(&conn).await.unwrap(), 2);
    }
}
