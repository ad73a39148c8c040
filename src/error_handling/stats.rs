//! Decode outcome statistics.
//!
//! This module provides thread-safe counters for successful decodes and for
//! each category of decode failure.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::DecodeErrorKind;

/// Thread-safe decode outcome tracker.
///
/// Uses atomic counters so request handlers can record outcomes concurrently.
/// Every failure kind is initialized to zero on creation.
///
/// # Thread Safety
///
/// This struct is thread-safe and can be shared across handlers using `Arc`.
pub struct DecodeStats {
    successes: AtomicUsize,
    failures: HashMap<DecodeErrorKind, AtomicUsize>,
}

impl DecodeStats {
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for kind in DecodeErrorKind::iter() {
            failures.insert(kind, AtomicUsize::new(0));
        }

        DecodeStats {
            successes: AtomicUsize::new(0),
            failures,
        }
    }

    /// Increment the success counter.
    pub fn increment_success(&self) {
        self.successes.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment a failure counter.
    ///
    /// All kinds are seeded in `new()`, so a missing key means a variant was
    /// added without being iterated; it is logged instead of panicking.
    pub fn increment_failure(&self, kind: DecodeErrorKind) {
        if let Some(counter) = self.failures.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment failure counter for {:?} which is not in the map. \
                 This indicates a bug in DecodeStats initialization.",
                kind
            );
        }
    }

    /// Get the count for a failure kind.
    pub fn get_failure_count(&self, kind: DecodeErrorKind) -> usize {
        self.failures
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or_else(|| {
                log::warn!(
                    "Failure kind {:?} not found in stats map, returning 0. \
                     This indicates a bug in DecodeStats initialization.",
                    kind
                );
                0
            })
    }

    /// Number of successful decodes.
    pub fn successes(&self) -> usize {
        self.successes.load(Ordering::SeqCst)
    }

    /// Get total failure count across all kinds.
    pub fn total_failures(&self) -> usize {
        DecodeErrorKind::iter()
            .map(|k| self.get_failure_count(k))
            .sum()
    }

    /// Successes plus failures.
    pub fn total(&self) -> usize {
        self.successes() + self.total_failures()
    }
}

impl Default for DecodeStats {
    fn default() -> Self {
        Self::new()
    }
}
