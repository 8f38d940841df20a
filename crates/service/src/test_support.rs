#![cfg(test)]
use std::path::PathBuf;

use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Fresh SQLite database file with the schema applied; isolated per test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let path = temp_path("cars", "db");
    let mut opt = ConnectOptions::new(format!("sqlite://{}?mode=rwc", path.display()));
    opt.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Unique path under the system temp dir.
pub fn temp_path(prefix: &str, ext: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{prefix}_{}.{ext}", uuid::Uuid::new_v4()))
}
