//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::config::constants::{DEFAULT_HOST, DEFAULT_PORT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Serve on the default address with the built-in region table
/// nik_parse
///
/// # Serve a full region table on all interfaces
/// nik_parse --host 0.0.0.0 --port 8080 --regions ./regions.json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "nik_parse",
    about = "Decodes Indonesian national identity numbers (NIK) over HTTP."
)]
pub struct Opt {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to bind the HTTP server to (0 picks an ephemeral port)
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// JSON region table to load instead of the built-in sample table
    #[arg(long, value_parser)]
    pub regions: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without going through the CLI parser.
///
/// # Examples
///
/// ```no_run
/// use nik_parse::Config;
///
/// let config = Config {
///     port: 8080,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server to
    pub host: String,

    /// Port to bind the HTTP server to
    pub port: u16,

    /// Region table file; `None` uses the built-in sample table
    pub regions: Option<PathBuf>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            regions: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            host: opt.host,
            port: opt.port,
            regions: opt.regions,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}

/// A configuration value that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and how to fix it
    pub message: String,
}

impl Config {
    /// Checks the configuration before the server starts.
    ///
    /// # Errors
    ///
    /// Returns the first field that is unusable.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.host.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "host",
                message: "must not be empty (use 0.0.0.0 to listen on all interfaces)".into(),
            });
        }

        if let Some(path) = &self.regions {
            if !path.is_file() {
                return Err(ConfigValidationError {
                    field: "regions",
                    message: format!(
                        "{} does not exist or is not a file (expected a JSON region table)",
                        path.display()
                    ),
                });
            }
        }

        Ok(())
    }

    /// Returns the `host:port` string the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
