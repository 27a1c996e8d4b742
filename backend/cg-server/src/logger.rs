//! Process-wide logging on top of fern.
//!
//! Every line has the shape `[timestamp - LEVEL] message [file:line]`. Only the
//! destination and level coloring vary with configuration.

use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::{Arguments, Display};
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// Append to a file, never colored
    File(PathBuf),
    Stdout { colored: bool },
}

impl LogSink {
    /// A configured log file wins over stdout, and coloring only applies to stdout
    pub fn from_config(log_file: Option<PathBuf>, colored: bool) -> Self {
        match log_file {
            Some(path) => LogSink::File(path),
            None => LogSink::Stdout { colored },
        }
    }
}

/// Install the global logger. Fails if called twice.
pub fn initialize(log_level: cg_config::LogLevel, sink: LogSink) -> ServerErrorResult<()> {
    let level_filter = *log_level;

    let base = Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn);

    let dispatch = match sink {
        LogSink::File(ref path) => {
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)?;
            }
            let file = fern::log_file(path).map_err(|e| ServerError::Logger {
                message: format!("Failed to open log file {}: {}", path.display(), e),
            })?;
            base.format(|out, message, record| {
                write_line(out, message, record, &record.level())
            })
            .chain(file)
        }
        LogSink::Stdout { colored: true } => {
            let colors = level_colors();
            base.format(move |out, message, record| {
                write_line(out, message, record, &colors.color(record.level()))
            })
            .chain(std::io::stdout())
        }
        // Plain output for non-TTY (systemd, docker logs)
        LogSink::Stdout { colored: false } => base
            .format(|out, message, record| write_line(out, message, record, &record.level()))
            .chain(std::io::stdout()),
    };

    dispatch.apply().map_err(|e| ServerError::Logger {
        message: format!("Failed to initialize logger: {e}"),
    })?;

    match sink {
        LogSink::File(path) => info!(
            "Logger initialized: level={}, file={}",
            level_filter,
            path.display()
        ),
        LogSink::Stdout { colored } => info!(
            "Logger initialized: level={}, stdout (colored: {})",
            level_filter, colored
        ),
    }

    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

fn write_line(
    out: FormatCallback<'_>,
    message: &Arguments,
    record: &Record,
    level: &dyn Display,
) {
    out.finish(format_args!(
        "[{} - {}] {} [{}:{}]",
        humantime::format_rfc3339(SystemTime::now()),
        level,
        message,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    ))
}
