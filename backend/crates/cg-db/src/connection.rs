use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use error_location::ErrorLocation;
use log::info;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

const MAX_CONNECTIONS: u32 = 10;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open (creating if missing) the SQLite database at `path`.
pub async fn open_pool(path: &Path) -> DbErrorResult<SqlitePool> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| DbError::Initialization {
            message: format!("Cannot create {}: {}", parent.display(), e),
            location: ErrorLocation::from(Location::caller()),
        })?;
    }

    info!("Connecting to database: {}", path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .busy_timeout(BUSY_TIMEOUT),
        )
        .await?;

    Ok(pool)
}

/// Apply the embedded schema migrations.
pub async fn run_migrations(pool: &SqlitePool) -> DbErrorResult<()> {
    info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Migrations complete");
    Ok(())
}
