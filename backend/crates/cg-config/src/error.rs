use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

/// Configuration failures. Validation errors name the key that was rejected.
#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("Invalid server.{field}: {message} {location}")]
    Server {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid database.{field}: {message} {location}")]
    Database {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot resolve config directory: {message} {location}")]
    ConfigDir {
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// A `[server]` setting was rejected
    #[track_caller]
    pub fn server<S: Into<String>>(field: &'static str, message: S) -> Self {
        ConfigError::Server {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// A `[database]` setting was rejected
    #[track_caller]
    pub fn database<S: Into<String>>(field: &'static str, message: S) -> Self {
        ConfigError::Database {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn config_dir<S: Into<String>>(message: S) -> Self {
        ConfigError::ConfigDir {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Dotted key of the rejected setting, e.g. `server.port`
    pub fn key(&self) -> Option<String> {
        match self {
            ConfigError::Server { field, .. } => Some(format!("server.{}", field)),
            ConfigError::Database { field, .. } => Some(format!("database.{}", field)),
            ConfigError::ConfigDir { .. } | ConfigError::Io { .. } | ConfigError::Toml { .. } => {
                None
            }
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
