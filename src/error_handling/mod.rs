//! Error handling and decode statistics.
//!
//! This module provides:
//! - Decode failure types returned to API callers
//! - Infrastructure error types (logger, listener, region table)
//! - Thread-safe counters of decode outcomes

mod stats;
mod types;

// Re-export public API
pub use stats::DecodeStats;
pub use types::{DecodeError, DecodeErrorKind, InitializationError, RegionTableError};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_decode_stats_initialization() {
        let stats = DecodeStats::new();
        for kind in DecodeErrorKind::iter() {
            assert_eq!(stats.get_failure_count(kind), 0);
        }
        assert_eq!(stats.successes(), 0);
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_decode_stats_increment() {
        let stats = DecodeStats::new();
        stats.increment_failure(DecodeErrorKind::InvalidLength);
        stats.increment_failure(DecodeErrorKind::InvalidLength);
        stats.increment_failure(DecodeErrorKind::UnknownDistrict);
        stats.increment_success();

        assert_eq!(stats.get_failure_count(DecodeErrorKind::InvalidLength), 2);
        assert_eq!(stats.get_failure_count(DecodeErrorKind::UnknownDistrict), 1);
        assert_eq!(stats.total_failures(), 3);
        assert_eq!(stats.successes(), 1);
        assert_eq!(stats.total(), 4);
    }

    #[test]
    fn test_decode_error_kind_mapping() {
        assert_eq!(
            DecodeError::InvalidLength { digits: 3 }.kind(),
            DecodeErrorKind::InvalidLength
        );
        assert_eq!(
            DecodeError::UnknownRegency {
                code: "3299".into()
            }
            .kind(),
            DecodeErrorKind::UnknownRegency
        );
        assert_eq!(
            DecodeError::InvalidBirthDate {
                day: 31,
                month: 2,
                year: 1990
            }
            .kind(),
            DecodeErrorKind::InvalidBirthDate
        );
    }

    #[test]
    fn test_decode_error_messages() {
        assert_eq!(
            DecodeError::InvalidLength { digits: 13 }.to_string(),
            "NIK harus 16 digit"
        );
        assert_eq!(
            DecodeError::UnknownProvince { code: "99".into() }.to_string(),
            "Kode provinsi tidak ditemukan"
        );
        assert_eq!(
            DecodeError::UnknownDistrict {
                code: "320199".into()
            }
            .to_string(),
            "Kode kecamatan tidak ditemukan"
        );
    }

    #[test]
    fn test_labels_are_unique() {
        let labels: std::collections::HashSet<_> =
            DecodeErrorKind::iter().map(|k| k.as_label()).collect();
        assert_eq!(labels.len(), DecodeErrorKind::iter().count());
    }
}
