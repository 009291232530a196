//! WireMock server utilities for API testing
//!
//! Provides helper functions to set up mock qBittorrent WebUI servers and to
//! inspect the requests the client made.

#![allow(dead_code)]

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Login endpoint that hands out `SID=<sid>`
pub async fn mount_login(server: &MockServer, sid: &str) {
    Mock::given(method("POST"))
        .and(path("/api/v2/auth/login"))
        .respond_with(login_ok(sid))
        .mount(server)
        .await;
}

/// 200 `Ok.` reply carrying a session cookie
pub fn login_ok(sid: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .append_header("set-cookie", format!("SID={}; HttpOnly; path=/", sid).as_str())
        .set_body_string("Ok.")
}

/// Mock server that accepts any login and hands out `SID=abc`
pub async fn setup_mock_server() -> MockServer {
    let server = MockServer::start().await;
    mount_login(&server, "abc").await;
    server
}

/// Requests received for `api_path` (e.g. `/api/v2/torrents/pause`)
pub async fn requests_to(server: &MockServer, api_path: &str) -> Vec<Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.url.path() == api_path)
        .collect()
}

/// Decoded form body of a request
pub fn form_of(request: &Request) -> Vec<(String, String)> {
    url::form_urlencoded::parse(&request.body)
        .into_owned()
        .collect()
}

/// Value of a header on a request, if present
pub fn header_of(request: &Request, name: &str) -> Option<String> {
    request
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}

/// Names of the parts of a multipart body, in order
pub fn multipart_part_names(request: &Request) -> Vec<String> {
    const MARKER: &str = "content-disposition: form-data; name=\"";
    let body = String::from_utf8_lossy(&request.body).into_owned();
    let lower = body.to_ascii_lowercase();
    lower
        .match_indices(MARKER)
        .filter_map(|(idx, _)| {
            let rest = &body[idx + MARKER.len()..];
            rest.split('"').next().map(|name| name.to_string())
        })
        .collect()
}
