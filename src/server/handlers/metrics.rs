//! Prometheus metrics handler.

use std::fmt::Write;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use strum::IntoEnumIterator;

use super::super::types::AppState;
use crate::error_handling::DecodeErrorKind;

/// Prometheus-compatible metrics endpoint
pub async fn metrics_handler(State(state): State<AppState>) -> Response {
    let stats = &state.decode_stats;

    let mut metrics = format!(
        r#"# HELP nik_parse_uptime_seconds Seconds since the server started
# TYPE nik_parse_uptime_seconds gauge
nik_parse_uptime_seconds {}

# HELP nik_parse_region_districts Number of districts in the loaded region table
# TYPE nik_parse_region_districts gauge
nik_parse_region_districts {}

# HELP nik_parse_visitors_total Number of recorded page views
# TYPE nik_parse_visitors_total counter
nik_parse_visitors_total {}

# HELP nik_parse_decodes_total Number of decode requests by outcome
# TYPE nik_parse_decodes_total counter
nik_parse_decodes_total{{outcome="success"}} {}
"#,
        state.start_time.elapsed().as_secs_f64(),
        state.regions.len(),
        state.visitors.total(),
        stats.successes(),
    );

    for kind in DecodeErrorKind::iter() {
        // Writing to a String cannot fail
        let _ = writeln!(
            metrics,
            "nik_parse_decodes_total{{outcome=\"{}\"}} {}",
            kind.as_label(),
            stats.get_failure_count(kind)
        );
    }

    (StatusCode::OK, metrics).into_response()
}
