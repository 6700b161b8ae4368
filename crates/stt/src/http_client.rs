use std::time::Duration;

use axum::http;
use reqwest::Client;

/// HTTP client shared by every request to the provider
///
/// Uploads can be long, so the timeout is generous; idle connections are
/// kept alive between requests.
pub fn http_client() -> reqwest::Result<Client> {
    let mut headers = http::HeaderMap::new();
    headers.insert(http::header::CONNECTION, http::HeaderValue::from_static("keep-alive"));

    Client::builder()
        .timeout(Duration::from_secs(120))
        .pool_idle_timeout(Some(Duration::from_secs(5)))
        .tcp_nodelay(true)
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .default_headers(headers)
        .build()
}
