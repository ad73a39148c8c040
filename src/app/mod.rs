//! Main application modules.
//!
//! This module provides the process-level pieces used by the binary:
//! signal handling for graceful shutdown.

pub mod shutdown;

// Re-export public API
pub use shutdown::shutdown_signal;
