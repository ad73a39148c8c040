//! In-memory visitor counter.
//!
//! Every page view appends a [`VisitorRecord`]; [`VisitorTally::stats`]
//! recomputes totals, distinct origins, today's visits and the latest ten
//! visits on each read. Records are kept for the life of the process only.

mod store;
mod tally;
mod types;

pub use store::{InMemoryVisitorStore, VisitorStore};
pub use tally::VisitorTally;
pub use types::{VisitorRecord, VisitorStats};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local, NaiveDate, TimeZone, Utc};
    use std::sync::Arc;

    fn tally() -> VisitorTally {
        VisitorTally::new(Arc::new(InMemoryVisitorStore::new()))
    }

    fn local_noon(y: i32, m: u32, d: u32) -> chrono::DateTime<Utc> {
        Local
            .with_ymd_and_hms(y, m, d, 12, 0, 0)
            .single()
            .expect("noon is never ambiguous")
            .with_timezone(&Utc)
    }

    #[test]
    fn test_empty_stats() {
        let stats = tally().stats();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.unique, 0);
        assert_eq!(stats.today, 0);
        assert!(stats.recent.is_empty());
    }

    #[test]
    fn test_total_and_unique() {
        let tally = tally();
        tally.record("10.0.0.1", "curl/8", "/");
        tally.record("10.0.0.2", "curl/8", "/");
        tally.record("10.0.0.1", "firefox", "/about");

        let stats = tally.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.unique, 2);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_stats_is_idempotent() {
        let tally = tally();
        tally.record("10.0.0.1", "curl/8", "/");
        tally.record("10.0.0.2", "curl/8", "/");
        assert_eq!(tally.stats(), tally.stats());
    }

    #[test]
    fn test_today_uses_local_day() {
        let tally = tally();
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        tally.record_at("a", "ua", "/", local_noon(2024, 6, 9));
        tally.record_at("b", "ua", "/", local_noon(2024, 6, 10));
        tally.record_at("c", "ua", "/", local_noon(2024, 6, 10) + Duration::hours(3));
        tally.record_at("d", "ua", "/", local_noon(2024, 6, 11));

        let stats = tally.stats_for_day(today);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.today, 2);
    }

    #[test]
    fn test_recent_is_newest_first_and_capped() {
        let tally = tally();
        let start = local_noon(2024, 6, 10);
        for i in 0..15 {
            tally.record_at(
                &format!("10.0.0.{i}"),
                "ua",
                &format!("/page/{i}"),
                start + Duration::minutes(i),
            );
        }

        let stats = tally.stats_for_day(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        assert_eq!(stats.recent.len(), 10);
        assert_eq!(stats.recent[0].page, "/page/14");
        assert_eq!(stats.recent[9].page, "/page/5");
    }

    #[test]
    fn test_empty_page_defaults_to_root() {
        let tally = tally();
        tally.record("10.0.0.1", "ua", "");
        assert_eq!(tally.stats().recent[0].page, "/");
    }

    #[test]
    fn test_record_serializes_camel_case_iso_timestamp() {
        let record = VisitorRecord {
            ip: "10.0.0.1".into(),
            user_agent: "curl/8".into(),
            timestamp: Utc.with_ymd_and_hms(2024, 6, 10, 5, 30, 0).unwrap(),
            page: "/".into(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["userAgent"], "curl/8");
        assert_eq!(json["timestamp"], "2024-06-10T05:30:00.000Z");
        assert_eq!(json["ip"], "10.0.0.1");
    }

    #[test]
    fn test_concurrent_records_are_all_kept() {
        let tally = Arc::new(tally());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let tally = Arc::clone(&tally);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        tally.record(&format!("10.0.0.{t}"), "ua", "/");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let stats = tally.stats();
        assert_eq!(stats.total, 800);
        assert_eq!(stats.unique, 8);
    }
}
