//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: counts the visit, matches the
//! path, and hands off to the page builders.

pub mod query;

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response, StatusCode};

use crate::http;
use crate::logger;
use crate::pages;
use crate::state::AppState;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let access_log = state.config.logging.access_log;
    if access_log {
        logger::log_request(req.method(), req.uri(), req.version());
    }

    let path = req.uri().path();
    let params = query::parse(req.uri().query().unwrap_or(""));

    let (status, html) = dispatch(path, &params, &state);

    if access_log {
        logger::log_response(status.as_u16(), html.len());
    }

    Ok(http::build_html_response(status, html, &state.config.http))
}

/// Select a page builder by exact path match and produce the body.
///
/// Counts the visit first, so matched and unmatched paths alike are
/// included in the total.
pub fn dispatch(
    path: &str,
    params: &HashMap<String, String>,
    state: &AppState,
) -> (StatusCode, String) {
    let visits = state.record_visit();

    match path {
        "/" | "/home" => (StatusCode::OK, pages::home(visits)),
        "/about" => (StatusCode::OK, pages::about()),
        "/stats" => (
            StatusCode::OK,
            pages::stats(
                visits,
                state.uptime(),
                state.started_at(),
                state.config.server.port,
            ),
        ),
        "/greet" => {
            let name = params
                .get("name")
                .map(String::as_str)
                .filter(|name| !name.is_empty())
                .unwrap_or("Guest");
            (StatusCode::OK, pages::greet(name))
        }
        "/time" => (StatusCode::OK, pages::time(chrono::Local::now())),
        _ => (StatusCode::NOT_FOUND, pages::not_found()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn test_state() -> AppState {
        AppState::new(Config::load_from("no_such_config_file").unwrap())
    }

    fn get(path: &str, state: &AppState) -> (StatusCode, String) {
        dispatch(path, &HashMap::new(), state)
    }

    #[test]
    fn test_known_paths_return_200() {
        let state = test_state();
        for path in ["/", "/home", "/about", "/stats", "/greet", "/time"] {
            let (status, _) = get(path, &state);
            assert_eq!(status, StatusCode::OK, "path {path}");
        }
    }

    #[test]
    fn test_home_embeds_visit_count() {
        let state = test_state();
        let (status, html) = get("/", &state);
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Welcome to My First Rust Web Server"));
        assert!(html.contains("<strong>1</strong>"));
    }

    #[test]
    fn test_unknown_path_returns_404() {
        let state = test_state();
        for path in ["/nope", "/home/", "/About", "/greet/extra"] {
            let (status, html) = get(path, &state);
            assert_eq!(status, StatusCode::NOT_FOUND, "path {path}");
            assert!(html.contains("404"));
        }
    }

    #[test]
    fn test_visit_counter_counts_every_request() {
        for total in [1_u64, 3, 10] {
            let state = test_state();
            // Mix of matched and unmatched paths; the last request is /stats
            for i in 1..total {
                let path = if i % 2 == 0 { "/about" } else { "/missing" };
                get(path, &state);
            }
            let (_, html) = get("/stats", &state);
            assert!(
                html.contains(&format!("Total Visits:</strong> {total}")),
                "expected {total} visits"
            );
        }
    }

    #[test]
    fn test_greet_defaults_to_guest() {
        let state = test_state();
        let (_, html) = get("/greet", &state);
        assert!(html.contains("Hello, Guest!"));

        let mut params = HashMap::new();
        params.insert("name".to_string(), String::new());
        let (_, html) = dispatch("/greet", &params, &state);
        assert!(html.contains("Hello, Guest!"));
    }

    #[test]
    fn test_greet_uses_name_parameter() {
        let state = test_state();
        let mut params = HashMap::new();
        params.insert("name".to_string(), "Ada".to_string());
        let (status, html) = dispatch("/greet", &params, &state);
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Hello, Ada!"));
    }

    #[test]
    fn test_greet_escapes_name_parameter() {
        let state = test_state();
        let mut params = HashMap::new();
        params.insert("name".to_string(), "<script>".to_string());
        let (_, html) = dispatch("/greet", &params, &state);
        assert!(html.contains("Hello, &lt;script&gt;!"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_about_is_byte_identical_across_calls() {
        let state = test_state();
        let (_, first) = get("/about", &state);
        let (_, second) = get("/about", &state);
        assert_eq!(first, second);
    }

    #[test]
    fn test_stats_reports_port_and_uptime() {
        let state = test_state();
        let (_, html) = get("/stats", &state);
        assert!(html.contains("Port:</strong> 3000"));
        assert!(html.contains("0h 0m 0s"));
    }
}
