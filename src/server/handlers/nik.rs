//! NIK decode handlers.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use log::debug;

use super::super::types::{AppState, NikQuery, NikRequest, NikResponse};
use crate::config::MESSAGE_MALFORMED;
use crate::error_handling::DecodeErrorKind;
use crate::nik::decode;

/// `POST /api/nik/parse` with a JSON body `{"nik": "..."}`
pub async fn parse_nik_post(State(state): State<AppState>, body: Bytes) -> Response {
    match serde_json::from_slice::<NikRequest>(&body) {
        Ok(request) => decode_response(&state, &request.nik),
        Err(e) => {
            debug!("Rejecting malformed decode payload: {}", e);
            malformed_response(&state)
        }
    }
}

/// `GET /api/nik/parse?nik=...`
pub async fn parse_nik_get(
    State(state): State<AppState>,
    Query(query): Query<NikQuery>,
) -> Response {
    match query.nik {
        Some(nik) => decode_response(&state, &nik),
        None => {
            debug!("Rejecting decode query without a nik parameter");
            malformed_response(&state)
        }
    }
}

fn decode_response(state: &AppState, input: &str) -> Response {
    let today = Local::now().date_naive();

    match decode(input, &state.regions, today) {
        Ok(parsed) => {
            state.decode_stats.increment_success();
            debug!("Decoded NIK with region {}", parsed.region.district_key());
            (StatusCode::OK, Json(NikResponse::success(&parsed))).into_response()
        }
        Err(e) => {
            state.decode_stats.increment_failure(e.kind());
            debug!("NIK rejected: {:?}", e);
            (StatusCode::BAD_REQUEST, Json(NikResponse::error(e.to_string()))).into_response()
        }
    }
}

fn malformed_response(state: &AppState) -> Response {
    state
        .decode_stats
        .increment_failure(DecodeErrorKind::MalformedPayload);
    (
        StatusCode::BAD_REQUEST,
        Json(NikResponse::error(MESSAGE_MALFORMED)),
    )
        .into_response()
}
