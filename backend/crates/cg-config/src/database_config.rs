use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME};

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

/// Which users store the server runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseBackend {
    #[default]
    Sqlite,
    Memory,
}

impl FromStr for DatabaseBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqlite" => Ok(DatabaseBackend::Sqlite),
            "memory" => Ok(DatabaseBackend::Memory),
            other => Err(ConfigError::database(
                "backend",
                format!("unknown backend '{}': expected sqlite or memory", other),
            )),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub backend: DatabaseBackend,
    /// SQLite file, relative to the config directory
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: DatabaseBackend::default(),
            path: String::from(DEFAULT_DATABASE_FILENAME),
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.backend == DatabaseBackend::Memory {
            return Ok(());
        }

        if self.path.trim().is_empty() {
            return Err(ConfigError::database("path", "must not be empty"));
        }

        // Keep the database inside the config directory
        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::database(
                "path",
                "must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
