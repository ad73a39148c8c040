// Shared test helpers for starting a server on an ephemeral port.
//
// This module is included by the integration test files with `mod helpers;`.

use nik_parse::initialization::{init_region_table, init_visitor_tally};
use nik_parse::{spawn_server, AppState, ServerHandle};

/// Starts a server with the built-in region table on 127.0.0.1:0.
#[allow(dead_code)] // Used by other test files
pub async fn start_test_server() -> ServerHandle {
    let state = AppState::new(
        init_region_table(None).expect("built-in region table should load"),
        init_visitor_tally(),
    );
    spawn_server("127.0.0.1:0", state)
        .await
        .expect("test server should bind an ephemeral port")
}

/// Base URL of a running test server.
#[allow(dead_code)]
pub fn base_url(handle: &ServerHandle) -> String {
    format!("http://{}", handle.local_addr())
}

/// HTTP client that ignores proxy environment variables.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("client should build")
}

/// GET `url` and decode the body as JSON.
#[allow(dead_code)]
pub async fn get_json(url: &str) -> serde_json::Value {
    client()
        .get(url)
        .send()
        .await
        .expect("request should succeed")
        .json()
        .await
        .expect("body should be JSON")
}
