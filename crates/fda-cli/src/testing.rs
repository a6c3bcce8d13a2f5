//! Shared fixtures for tests that talk to a local registry.

use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Three October labels; the last one has no `openfda` fields.
pub const THREE_OCTOBER_LABELS: &str = r#"{
    "meta": { "results": { "skip": 0, "limit": 500, "total": 3 } },
    "results": [
        {
            "effective_time": "20241002",
            "openfda": {
                "brand_name": ["Advil"],
                "generic_name": ["IBUPROFEN"],
                "manufacturer_name": ["Haleon US Holdings LLC"]
            }
        },
        {
            "effective_time": "20241017",
            "openfda": {
                "brand_name": ["Lipitor"],
                "generic_name": ["ATORVASTATIN CALCIUM"],
                "manufacturer_name": ["Pfizer Laboratories Div Pfizer Inc"]
            }
        },
        { "effective_time": "20241030", "openfda": {} }
    ]
}"#;

/// One-shot local registry. Returns the endpoint URL and a handle that
/// yields the request path, or `None` when no request arrived in time.
pub fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<Option<String>>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind local server");
    let port = server
        .server_addr()
        .to_ip()
        .map(|a| a.port())
        .expect("tcp listener");

    let handle = thread::spawn(move || {
        let request = server.recv_timeout(Duration::from_secs(2)).ok()??;
        let url = request.url().to_string();
        let response =
            tiny_http::Response::from_string(body).with_status_code(tiny_http::StatusCode(status));
        request.respond(response).ok()?;
        Some(url)
    });

    (format!("http://127.0.0.1:{port}/drug/label.json"), handle)
}
