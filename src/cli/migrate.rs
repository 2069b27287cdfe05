use anyhow::Result;
use sqlx_migrator::{Migrate, Plan};

use crate::config::Config;

/// Apply all pending migrations
pub async fn migrate(config: &Config) -> Result<()> {
    tracing::info!("Migrating database {}", config.database.url);

    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    crate::db::migrate(&pool).await?;
    pool.close().await;

    tracing::info!("Migrations applied");

    Ok(())
}

/// Revert every migration, dropping all data, then apply them again
pub async fn reset(config: &Config) -> Result<()> {
    tracing::info!("Resetting database {}", config.database.url);

    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    let migrator = wsid_db::migrator()?;

    let mut conn = pool.acquire().await?;
    migrator.run(&mut *conn, &Plan::revert_all()).await?;
    migrator.run(&mut *conn, &Plan::apply_all()).await?;
    drop(conn);

    pool.close().await;

    tracing::info!("Database reset");

    Ok(())
}
