mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;


pub use config::Config;
pub use database_config::{DatabaseBackend, DatabaseConfig};
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "CG_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".chronograf";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8888;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "chronograf-v1.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
