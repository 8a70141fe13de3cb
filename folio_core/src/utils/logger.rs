//! File logger for developer diagnostics.
//!
//! Effect failures are cosmetic, so they are never surfaced in the UI; they
//! land here and on stderr instead. Logs to `~/.folio/logs/latest.log`.

use chrono::{DateTime, Utc};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Clone)]
pub struct Logger {
    file_handle: Arc<Mutex<Option<std::fs::File>>>,
}

impl Logger {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        let logs_dir = PathBuf::from(home).join(".folio").join("logs");
        let log_file_path = logs_dir.join("latest.log");

        fs::create_dir_all(&logs_dir)?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file_path)?;

        Ok(Self {
            file_handle: Arc::new(Mutex::new(Some(file))),
        })
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        let timestamp: DateTime<Utc> = Utc::now();
        let formatted_timestamp = timestamp.format("%Y-%m-%d %H:%M:%S%.3f UTC");

        let log_line = format!("[{}] [{}] {}\n", formatted_timestamp, level, message);

        if let Ok(mut file_guard) = self.file_handle.lock() {
            if let Some(ref mut file) = *file_guard {
                let _ = file.write_all(log_line.as_bytes());
                let _ = file.flush();
            }
        }
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Initializes the process-wide logger. Safe to call more than once; later
/// calls are no-ops.
pub fn init_global_logger() -> Result<(), Box<dyn std::error::Error>> {
    if GLOBAL_LOGGER.get().is_some() {
        return Ok(());
    }
    let logger = Logger::new()?;
    let _ = GLOBAL_LOGGER.set(logger);
    Ok(())
}

/// Logs a warning through the global logger (and stderr), if initialized.
pub fn warn(message: &str) {
    eprintln!("folio: {message}");
    if let Some(logger) = GLOBAL_LOGGER.get() {
        logger.warn(message);
    }
}

/// Logs an info line through the global logger, if initialized.
pub fn info(message: &str) {
    if let Some(logger) = GLOBAL_LOGGER.get() {
        logger.info(message);
    }
}

/// Logs an error through the global logger (and stderr), if initialized.
pub fn error(message: &str) {
    eprintln!("folio: {message}");
    if let Some(logger) = GLOBAL_LOGGER.get() {
        logger.error(message);
    }
}
