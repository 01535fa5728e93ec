//! HTTP response building module
//!
//! Every route answers with an HTML document, so a single builder covers
//! both the 200 and 404 cases.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::config::HttpConfig;

/// Build an HTML response with the standard headers
pub fn build_html_response(
    status: StatusCode,
    html: String,
    http_config: &HttpConfig,
) -> Response<Full<Bytes>> {
    let content_length = html.len();

    Response::builder()
        .status(status)
        .header("Content-Type", &http_config.default_content_type)
        .header("Content-Length", content_length)
        .header("Server", &http_config.server_name)
        .body(Full::new(Bytes::from(html)))
        .unwrap_or_else(|e| {
            log_build_error(status, &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: StatusCode, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
