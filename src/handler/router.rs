//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for route
//! matching and dispatching to the bound handler.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;

use crate::handler::pages;
use crate::http;
use crate::logger;

/// A route handler producing a complete response
type HandlerFn = fn() -> Response<Full<Bytes>>;

/// Fixed route table: exact path → handler, evaluated in order.
///
/// The paths are mutually exclusive literals, so order does not change
/// the outcome, but evaluation order stays deterministic for when it
/// eventually matters.
const ROUTES: &[(&str, HandlerFn)] = &[
    ("/api/health", pages::health_response),
    ("/static/styles.css", pages::styles_response),
    ("/", pages::root_response),
];

/// Main entry point for HTTP request handling.
///
/// Method-agnostic by design: every route answers identically to GET,
/// POST, HEAD and the rest. The query string and fragment are ignored
/// because matching runs against the path component only.
pub async fn handle_request<B>(req: Request<B>) -> Result<Response<Full<Bytes>>, Infallible> {
    logger::log_request(req.method(), req.uri(), req.version());
    Ok(dispatch(req.uri().path()))
}

/// Match `path` against the route table; first exact match wins.
///
/// No match is a normal outcome, answered with 404, never an error.
pub fn dispatch(path: &str) -> Response<Full<Bytes>> {
    match ROUTES.iter().find(|(route, _)| path == *route) {
        Some((_, handler)) => handler(),
        None => http::build_not_found_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_string(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_dispatch_health() {
        let resp = dispatch("/api/health");
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "application/json");
        assert_eq!(body_string(resp).await, r#"{"data":{"status":"ok"}}"#);
    }

    #[tokio::test]
    async fn test_dispatch_root() {
        let resp = dispatch("/");
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/html");
        assert!(body_string(resp).await.contains("platform-404"));
    }

    #[tokio::test]
    async fn test_dispatch_styles() {
        let resp = dispatch("/static/styles.css");
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/css");
        assert!(body_string(resp).await.contains("/* platform-404 */"));
    }

    #[tokio::test]
    async fn test_dispatch_unknown_path() {
        let resp = dispatch("/unknown");
        assert_eq!(resp.status(), 404);
        assert_eq!(body_string(resp).await, "Not Found");
    }

    #[test]
    fn test_exact_match_only() {
        // No prefix or trailing-slash leniency
        assert_eq!(dispatch("/api/health/").status(), 404);
        assert_eq!(dispatch("/api").status(), 404);
        assert_eq!(dispatch("/static/styles.css.map").status(), 404);
        assert_eq!(dispatch("").status(), 404);
    }

    #[tokio::test]
    async fn test_handle_request_ignores_query_string() {
        let req = Request::builder()
            .uri("/api/health?verbose=1")
            .body(())
            .unwrap();
        let resp = handle_request(req).await.unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "application/json");
    }

    #[tokio::test]
    async fn test_handle_request_is_method_agnostic() {
        for method in ["GET", "POST", "PUT", "DELETE", "HEAD"] {
            let req = Request::builder()
                .method(method)
                .uri("/api/health")
                .body(())
                .unwrap();
            let resp = handle_request(req).await.unwrap();
            assert_eq!(resp.status(), 200, "method {method} should match");
        }
    }

    #[tokio::test]
    async fn test_handle_request_unknown_is_404() {
        let req = Request::builder().uri("/nope").body(()).unwrap();
        let resp = handle_request(req).await.unwrap();
        assert_eq!(resp.status(), 404);
    }
}
