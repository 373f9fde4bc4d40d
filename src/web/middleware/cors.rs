//! CORS middleware configuration.

use axum::http::header::{ACCEPT, CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

/// Methods used by the API.
const METHODS: [Method; 4] = [Method::GET, Method::POST, Method::PUT, Method::OPTIONS];

/// Create a CORS layer from configuration.
///
/// With no configured origins (or none that parse) any origin is allowed.
pub fn create_cors_layer(origins: &[String]) -> CorsLayer {
    let parsed_origins: Vec<HeaderValue> =
        origins.iter().filter_map(|o| o.parse().ok()).collect();

    let layer = CorsLayer::new()
        .allow_methods(METHODS)
        .allow_headers([CONTENT_TYPE, ACCEPT])
        .expose_headers([CONTENT_DISPOSITION]);

    if parsed_origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(parsed_origins)
    }
}
