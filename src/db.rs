use anyhow::Context;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use crate::config::DbConfig;

/// Lazy pool: the server must come up even when the store is down, so the
/// first real connection is made on first use and failures surface as
/// request-level errors.
pub fn connect_pool(db: &DbConfig) -> MySqlPool {
    MySqlPoolOptions::new()
        .max_connections(10)
        .connect_lazy_with(db.connect_options())
}

pub async fn ping(pool: &MySqlPool) -> anyhow::Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .context("ping database")?;
    Ok(())
}
