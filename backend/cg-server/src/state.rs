use crate::error::Result as ServerErrorResult;

use cg_config::{Config, DatabaseBackend};
use cg_core::UsersStore;
use cg_db::{InMemoryUsersStore, SqliteUsersStore};

use std::sync::Arc;

use log::{info, warn};

/// Shared application state for REST handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UsersStore>,
}

impl AppState {
    pub fn new(users: Arc<dyn UsersStore>) -> Self {
        Self { users }
    }

    /// Build the users store selected by configuration.
    ///
    /// For SQLite this opens (or creates) the database file and applies
    /// migrations before returning.
    pub async fn from_config(config: &Config) -> ServerErrorResult<Self> {
        let users: Arc<dyn UsersStore> = match config.database.backend {
            DatabaseBackend::Sqlite => {
                let pool = cg_db::open_pool(&config.database_path()?).await?;
                cg_db::run_migrations(&pool).await?;
                info!("Database connection established");
                Arc::new(SqliteUsersStore::new(pool))
            }
            DatabaseBackend::Memory => {
                warn!("Using in-memory users store - users are lost on restart");
                Arc::new(InMemoryUsersStore::new())
            }
        };

        Ok(Self::new(users))
    }
}
