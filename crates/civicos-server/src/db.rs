use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Pool size actually used for `url`.
///
/// SQLite pools hold a single connection: a deferred `BEGIN` that reads first
/// cannot take the write lock while another connection holds it, so transactions
/// queue on the one connection instead.
pub fn pool_size(url: &str, requested: u32) -> u32 {
    if url.starts_with("sqlite:") {
        1
    } else {
        requested.max(1)
    }
}

/// Open the shared connection pool.
///
/// One pool is created per process and handed to every handler through `AppState`.
pub async fn connect(url: &str, max_connections: u32) -> Result<DatabaseConnection, DbErr> {
    let size = pool_size(url, max_connections);
    if size != max_connections && url.starts_with("sqlite:") {
        tracing::info!(requested = max_connections, size, "sqlite pool limited to one connection");
    }

    let mut options = ConnectOptions::new(url.to_string());

    options.max_connections(size);
    // Keep one connection alive: `sqlite::memory:` databases vanish with their last connection.
    options.min_connections(1);
    options.connect_timeout(Duration::from_secs(5));
    options.acquire_timeout(Duration::from_secs(30));
    options.idle_timeout(Duration::from_secs(300));
    options.sqlx_logging(false);

    Database::connect(options).await
}

/// Apply all pending schema migrations.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    let pending = Migrator::get_pending_migrations(db).await?;
    if pending.is_empty() {
        tracing::debug!("schema is up to date");
        return Ok(());
    }

    tracing::info!(pending = pending.len(), "applying migrations");
    Migrator::up(db, None).await
}
