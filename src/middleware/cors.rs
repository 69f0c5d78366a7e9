//! CORS policy for browser clients.
//!
//! Note:
//! - CORS is enforced by browsers. CLI clients and server-to-server calls
//!   (the usual API key holders) are not restricted by CORS.
//! - Applied outside the inbound auth layer, so preflight `OPTIONS` requests
//!   are answered here and never need an API key.
//!
//! Responsibility:
//! - Allow browsers to send `Authorization` / `X-API-Key`.
//! - Let browsers read the `WWW-Authenticate` challenge on a 401.
//!
//! Policy:
//! - Development: permissive (Allow-Origin: *), WITHOUT credentials.
//! - Production: allowlist origins from Config (comma-separated env var), WITHOUT credentials.

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::Config;
use crate::services::auth::credential::X_API_KEY;

/// Apply CORS policy to the given Router.
///
/// Do not combine wildcard origin (`Any`) with `allow_credentials(true)`.
pub fn apply(router: Router, config: &Config) -> Router {
    let cors = if config.app_env.is_production() {
        // Production: allow only configured origins (exact match).
        // An empty allowlist allows no origin at all (no CORS headers).
        let allowed: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        let allow_origin = AllowOrigin::predicate(move |origin: &HeaderValue, _req| {
            allowed.iter().any(|v| v == origin)
        });

        CorsLayer::new().allow_origin(allow_origin)
    } else {
        // Development: permissive (no credentials)
        CorsLayer::new().allow_origin(Any)
    }
    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
    .allow_headers([
        header::AUTHORIZATION,
        header::CONTENT_TYPE,
        header::ACCEPT,
        // API key header read by inbound auth
        X_API_KEY,
        HeaderName::from_static("x-request-id"),
    ])
    .expose_headers([header::WWW_AUTHENTICATE])
    .max_age(std::time::Duration::from_secs(60 * 10));

    router.layer(cors)
}
