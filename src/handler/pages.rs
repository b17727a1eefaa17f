//! Fixed page content handlers
//!
//! Each handler is a pure function producing the same response on every
//! call; none of them inspects the request.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use serde::Serialize;

use crate::http;

/// Landing page served at `/`
const ROOT_HTML: &str = "<!DOCTYPE html>\n<html>\n<head><title>platform-404</title></head>\n<body>\n<h1>platform-404</h1>\n</body>\n</html>";

/// Stylesheet served at `/static/styles.css`
const STYLES_CSS: &str = "/* platform-404 */\n\nbody {\n  font-family: sans-serif;\n}\n";

#[derive(Serialize)]
struct HealthBody {
    data: HealthData,
}

#[derive(Serialize)]
struct HealthData {
    status: &'static str,
}

/// Health check response: `{"data":{"status":"ok"}}`
pub fn health_response() -> Response<Full<Bytes>> {
    http::build_json_response(&HealthBody {
        data: HealthData { status: "ok" },
    })
}

/// Root HTML landing page response
pub fn root_response() -> Response<Full<Bytes>> {
    http::build_html_response(ROOT_HTML)
}

/// Static stylesheet response
pub fn styles_response() -> Response<Full<Bytes>> {
    http::build_css_response(STYLES_CSS)
}
