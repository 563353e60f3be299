use std::{str::FromStr, time::Duration};

use anyhow::Result;
use sea_orm::{DatabaseConnection, SqlxSqliteConnector};
use sea_orm_migration::MigratorTrait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::{config::AppConfig, migration::Migrator};

/// Open the storage context described by `config`.
///
/// An in-memory database only exists for as long as its connection does, so
/// the pool is pinned to a single connection that never idles out.
pub async fn create_orm_conn(config: &AppConfig) -> Result<DatabaseConnection> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(config.enforce_foreign_keys);

    let mut pool_options = SqlitePoolOptions::new();
    if config.is_in_memory() {
        pool_options = pool_options
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>);
    }

    let pool = pool_options.connect_with(options).await?;
    tracing::debug!(
        url = %config.database_url,
        foreign_keys = config.enforce_foreign_keys,
        "database connected"
    );
    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// Apply every pending schema migration.
pub async fn run_migrations(conn: &DatabaseConnection) -> Result<()> {
    Migrator::up(conn, None).await?;
    Ok(())
}

pub async fn close(conn: DatabaseConnection) -> Result<()> {
    conn.close().await?;
    tracing::debug!("database connection closed");
    Ok(())
}
