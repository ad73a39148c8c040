//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including server defaults, decoding rules, and response limits.

use chrono::NaiveDate;

// Server defaults
/// Default bind address for the HTTP server
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Default port for the HTTP server
pub const DEFAULT_PORT: u16 = 3000;

// NIK layout
/// Number of digits in a NIK after stripping separators
pub const NIK_LENGTH: usize = 16;
/// Offset added to the day of birth for female holders
pub const FEMALE_DAY_OFFSET: u32 = 40;
/// Two-digit years below this value belong to the 2000s, the rest to the 1900s.
///
/// `24` expands to 2024 and `25` expands to 1925.
pub const YEAR_PIVOT: u32 = 25;

// Market day (pasaran) cycle
/// Reference date with a known market day: 17 August 1945 was Jumat Legi.
pub const PASARAN_REFERENCE: (i32, u32, u32) = (1945, 8, 17);

/// Returns the reference date as a `NaiveDate`.
pub fn pasaran_reference_date() -> NaiveDate {
    let (year, month, day) = PASARAN_REFERENCE;
    NaiveDate::from_ymd_opt(year, month, day).expect("PASARAN_REFERENCE is a valid calendar date")
}

// Visitor stats
/// Number of records returned in the `recent` list of visitor stats
pub const RECENT_VISITOR_LIMIT: usize = 10;
/// Placeholder used when the origin address or user agent cannot be determined
pub const UNKNOWN_CLIENT: &str = "unknown";
/// Page recorded when a visit does not name one
pub const DEFAULT_PAGE: &str = "/";

// Response messages (Indonesian, the only locale served)
/// Message returned with every successful decode
pub const MESSAGE_VALID: &str = "NIK valid";
/// Message returned when the request payload cannot be read
pub const MESSAGE_MALFORMED: &str = "Terjadi kesalahan saat memproses NIK";

// Header names used to derive the origin address
pub const HEADER_X_FORWARDED_FOR: &str = "x-forwarded-for";
pub const HEADER_X_REAL_IP: &str = "x-real-ip";
