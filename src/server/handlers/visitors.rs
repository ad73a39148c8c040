//! Visitor counter handlers.

use std::net::SocketAddr;

use axum::{
    body::Bytes,
    extract::{ConnectInfo, State},
    http::{header::USER_AGENT, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use log::debug;
use serde_json::json;

use super::super::types::{AppState, VisitRequest};
use crate::config::{DEFAULT_PAGE, HEADER_X_FORWARDED_FOR, HEADER_X_REAL_IP, UNKNOWN_CLIENT};

/// `POST /api/visitors` with a JSON body `{"page": "/..."}`
pub async fn record_visit(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = match serde_json::from_slice::<VisitRequest>(&body) {
        Ok(request) => request,
        Err(e) => {
            debug!("Rejecting malformed visit payload: {}", e);
            return (StatusCode::BAD_REQUEST, Json(json!({ "success": false }))).into_response();
        }
    };

    let ip = origin_address(&headers, Some(peer));
    let user_agent = header_value(&headers, USER_AGENT.as_str()).unwrap_or(UNKNOWN_CLIENT);
    let page = request.page.as_deref().unwrap_or(DEFAULT_PAGE);

    state.visitors.record(&ip, user_agent, page);

    (StatusCode::OK, Json(json!({ "success": true }))).into_response()
}

/// `GET /api/visitors`
pub async fn visitor_stats(State(state): State<AppState>) -> Response {
    (StatusCode::OK, Json(state.visitors.stats())).into_response()
}

/// Resolves the client address: first `X-Forwarded-For` hop, then
/// `X-Real-IP`, then the socket peer, else `unknown`.
///
/// The forwarding headers are taken as sent. Behind a reverse proxy the peer
/// is the proxy itself, so it is only the last resort.
pub fn origin_address(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    if let Some(forwarded) = header_value(headers, HEADER_X_FORWARDED_FOR) {
        if let Some(first) = forwarded.split(',').map(str::trim).find(|s| !s.is_empty()) {
            return first.to_string();
        }
    }

    if let Some(real_ip) = header_value(headers, HEADER_X_REAL_IP) {
        return real_ip.to_string();
    }

    peer.map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn peer() -> Option<SocketAddr> {
        Some("192.0.2.7:51000".parse().unwrap())
    }

    #[test]
    fn test_origin_prefers_first_forwarded_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HEADER_X_FORWARDED_FOR,
            HeaderValue::from_static("203.0.113.5, 10.0.0.1"),
        );
        headers.insert(HEADER_X_REAL_IP, HeaderValue::from_static("198.51.100.9"));
        assert_eq!(origin_address(&headers, peer()), "203.0.113.5");
    }

    #[test]
    fn test_forwarded_hop_beats_socket_peer() {
        let mut headers = HeaderMap::new();
        headers.insert(HEADER_X_FORWARDED_FOR, HeaderValue::from_static("203.0.113.5"));
        assert_eq!(origin_address(&headers, peer()), "203.0.113.5");

        let mut headers = HeaderMap::new();
        headers.insert(HEADER_X_REAL_IP, HeaderValue::from_static("198.51.100.9"));
        assert_eq!(origin_address(&headers, peer()), "198.51.100.9");
    }

    #[test]
    fn test_origin_falls_back_to_real_ip() {
        let mut headers = HeaderMap::new();
        headers.insert(HEADER_X_FORWARDED_FOR, HeaderValue::from_static(" , "));
        headers.insert(HEADER_X_REAL_IP, HeaderValue::from_static("198.51.100.9"));
        assert_eq!(origin_address(&headers, peer()), "198.51.100.9");
    }

    #[test]
    fn test_origin_falls_back_to_peer_then_unknown() {
        let headers = HeaderMap::new();
        assert_eq!(origin_address(&headers, peer()), "192.0.2.7");
        assert_eq!(origin_address(&headers, None), "unknown");
    }
}
