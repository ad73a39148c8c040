//! Visitor counting.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, Utc};
use log::debug;

use super::store::VisitorStore;
use super::types::{VisitorRecord, VisitorStats};
use crate::config::{DEFAULT_PAGE, RECENT_VISITOR_LIMIT};

/// Records page views and reports aggregate counts.
///
/// Owns its store; create one at startup and share it through the server
/// state.
pub struct VisitorTally {
    store: Arc<dyn VisitorStore>,
}

impl VisitorTally {
    pub fn new(store: Arc<dyn VisitorStore>) -> Self {
        Self { store }
    }

    /// Records a visit stamped with the current time.
    pub fn record(&self, ip: &str, user_agent: &str, page: &str) {
        self.record_at(ip, user_agent, page, Utc::now());
    }

    /// Records a visit with an explicit timestamp. An empty page is stored
    /// as `/`.
    pub fn record_at(&self, ip: &str, user_agent: &str, page: &str, timestamp: DateTime<Utc>) {
        let page = if page.trim().is_empty() {
            DEFAULT_PAGE
        } else {
            page
        };

        debug!("Recording visit to {} from {}", page, ip);

        self.store.append(VisitorRecord {
            ip: ip.to_string(),
            user_agent: user_agent.to_string(),
            timestamp,
            page: page.to_string(),
        });
    }

    /// Stats for the server's current local calendar day.
    pub fn stats(&self) -> VisitorStats {
        self.stats_for_day(Local::now().date_naive())
    }

    /// Stats with `today` counted as the given local calendar day.
    pub fn stats_for_day(&self, today: NaiveDate) -> VisitorStats {
        let records = self.store.snapshot();

        let unique = records
            .iter()
            .map(|r| r.ip.as_str())
            .collect::<HashSet<_>>()
            .len();

        let today_count = records
            .iter()
            .filter(|r| r.timestamp.with_timezone(&Local).date_naive() == today)
            .count();

        let recent = records
            .iter()
            .rev()
            .take(RECENT_VISITOR_LIMIT)
            .cloned()
            .collect();

        VisitorStats {
            total: records.len(),
            unique,
            today: today_count,
            recent,
        }
    }

    /// Number of recorded visits.
    pub fn total(&self) -> usize {
        self.store.len()
    }
}
