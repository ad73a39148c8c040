//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (server defaults, decoding rules, messages)
//! - CLI option types and parsing
//! - Library configuration and validation

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ConfigValidationError, LogFormat, LogLevel, Opt};
