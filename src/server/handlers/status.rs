//! JSON status handler.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use strum::IntoEnumIterator;

use super::super::types::{AppState, DecodeCounts, RegionCounts, StatusResponse, VisitorCounts};
use crate::error_handling::DecodeErrorKind;

/// JSON status endpoint with decode and visitor counters
pub async fn status_handler(State(state): State<AppState>) -> Response {
    let stats = &state.decode_stats;

    let response = StatusResponse {
        uptime_seconds: state.start_time.elapsed().as_secs_f64(),
        regions: RegionCounts {
            provinces: state.regions.province_count(),
            regencies: state.regions.regency_count(),
            districts: state.regions.len(),
        },
        decodes: DecodeCounts {
            total: stats.total(),
            success: stats.successes(),
            failed: stats.total_failures(),
            failures: DecodeErrorKind::iter()
                .map(|kind| (kind.as_label(), stats.get_failure_count(kind)))
                .collect(),
        },
        visitors: VisitorCounts {
            total: state.visitors.total(),
        },
    };

    let json = match serde_json::to_string_pretty(&response) {
        Ok(json) => json,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to serialize status: {}", e),
            )
                .into_response();
        }
    };

    (StatusCode::OK, [("content-type", "application/json")], json).into_response()
}
