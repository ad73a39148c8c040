//! Visitor record types.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// One page view.
///
/// Created once per visit and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorRecord {
    /// Origin address of the client
    pub ip: String,
    pub user_agent: String,
    #[serde(serialize_with = "serialize_iso8601")]
    pub timestamp: DateTime<Utc>,
    /// Requested page path
    pub page: String,
}

/// Aggregate view over all recorded visits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitorStats {
    pub total: usize,
    /// Distinct origin addresses
    pub unique: usize,
    /// Visits on the server's local calendar day
    pub today: usize,
    /// Most recent visits, newest first
    pub recent: Vec<VisitorRecord>,
}

/// ISO 8601 with millisecond precision and a `Z` suffix.
fn serialize_iso8601<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}
