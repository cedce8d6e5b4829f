use std::time::{Duration, Instant};

use axum::extract::{MatchedPath, Request};
use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::middleware::{from_fn, Next};
use axum::response::Response;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CorsConfig;

/// Declarative per-client request ceiling, advertised but not enforced.
const RATE_LIMIT_HEADER_VALUE: &str = "100";

/// Request logging middleware: method, matched path, status and latency.
/// Client and server errors log at warn.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    let response = next.run(req).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_millis();
    if status.is_client_error() || status.is_server_error() {
        log::warn!("{} {} -> {} ({}ms)", method, path, status.as_u16(), latency_ms);
    } else {
        log::info!("{} {} -> {} ({}ms)", method, path, status.as_u16(), latency_ms);
    }

    response
}

/// CORS policy: configured origins, or mirror the request origin when none
/// are configured (development).
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origin = if config.allowed_origins.is_empty() {
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::list(
            config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(36_000))
}

/// Wrap a router with the standard middleware stack: request logging, CORS,
/// and security/rate-limit response headers.
pub fn apply_middleware<S>(router: Router<S>, cors: &CorsConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(from_fn(log_requests))
        .layer(cors_layer(cors))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static("x-ratelimit-limit"),
            HeaderValue::from_static(RATE_LIMIT_HEADER_VALUE),
        ))
}
