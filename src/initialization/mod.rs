//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources the
//! server is built from:
//! - Logger
//! - Region table
//! - Visitor tally

mod logger;

use std::sync::Arc;

use log::info;

use crate::error_handling::RegionTableError;
use crate::region::RegionTable;
use crate::visitors::{InMemoryVisitorStore, VisitorTally};

// Re-export public API
pub use logger::init_logger_with;

/// Loads the region table named in the configuration.
///
/// `None` selects the built-in sample table.
///
/// # Errors
///
/// Returns a `RegionTableError` if the file cannot be read or is malformed.
pub fn init_region_table(
    path: Option<&std::path::Path>,
) -> Result<Arc<RegionTable>, RegionTableError> {
    let table = match path {
        Some(path) => {
            info!("Loading region table from {}", path.display());
            RegionTable::from_path(path)?
        }
        None => {
            info!("Loading built-in region table");
            RegionTable::builtin()?
        }
    };

    info!(
        "Region table ready: {} provinces, {} regencies, {} districts",
        table.province_count(),
        table.regency_count(),
        table.len()
    );

    Ok(Arc::new(table))
}

/// Creates an empty in-memory visitor tally.
///
/// Records live as long as the returned tally; nothing is persisted.
pub fn init_visitor_tally() -> Arc<VisitorTally> {
    Arc::new(VisitorTally::new(Arc::new(InMemoryVisitorStore::new())))
}
