//! Middleware stack for the API server
//!
//! Provides request ID generation, tracing, timeouts, compression, CORS and rate limiting.
//! Rejections produced by the layers themselves are answered with the same
//! `{code, message}` envelope as handler errors.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use erp_common::{AppError, CorsConfig, RateLimitConfig};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor, GovernorError,
    GovernorLayer,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::response::ApiError;
use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Upper bound on handler time before the request is answered with 408
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Apply the middleware stack with configured CORS and per-IP rate limiting
///
/// The rate limiter keys on the peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn apply_middleware_with_config(
    router: Router<AppState>,
    rate_limit_config: &RateLimitConfig,
    cors_config: &CorsConfig,
    is_production: bool,
) -> Result<Router<AppState>, AppError> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(replenish_interval_ms(rate_limit_config.requests_per_second))
            .burst_size(rate_limit_config.burst)
            .key_extractor(PeerIpKeyExtractor)
            .error_handler(rate_limit_response)
            .finish()
            .ok_or_else(|| {
                AppError::Config("Rate limit burst and rate must be non-zero".to_string())
            })?,
    );

    // Layers wrap in reverse order of addition:
    // Request -> Envelope -> RateLimit -> RequestID -> Trace -> Timeout -> Compression -> CORS -> Handler
    Ok(router
        .layer(create_cors_layer_from_config(cors_config, is_production))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            REQUEST_TIMEOUT,
        ))
        // Tracing
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Request ID propagation
        .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID generation
        .layer(SetRequestIdLayer::new(
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            MakeRequestUuid,
        ))
        // Rate limiting
        .layer(GovernorLayer {
            config: governor_conf,
        })
        .layer(middleware::map_response(envelope_bare_errors)))
}

/// Answer a rate-limited request with the error envelope, keeping the limiter's headers
fn rate_limit_response(error: GovernorError) -> Response {
    let (err, headers) = match error {
        GovernorError::TooManyRequests { wait_time, headers } => (
            ApiError::RateLimited {
                wait_secs: wait_time,
            },
            headers,
        ),
        GovernorError::UnableToExtractKey => (
            ApiError::internal(anyhow::anyhow!("Rate limiter could not read the peer address")),
            None,
        ),
        GovernorError::Other { code, headers, .. } => (ApiError::from_status(code), headers),
    };

    let mut response = err.into_response();
    if let Some(headers) = headers {
        response.headers_mut().extend(headers);
    }
    response
}

/// Wrap error responses that carry no body (the timeout layer's 408) in the envelope
pub async fn envelope_bare_errors(response: Response) -> Response {
    let status = response.status();
    let is_error = status.is_client_error() || status.is_server_error();
    if !is_error || response.headers().contains_key(header::CONTENT_TYPE) {
        return response;
    }

    let (parts, _) = response.into_parts();
    let mut enveloped = ApiError::from_status(status).into_response();
    for (name, value) in &parts.headers {
        if name != header::CONTENT_LENGTH {
            enveloped.headers_mut().append(name.clone(), value.clone());
        }
    }
    enveloped
}

/// Milliseconds between quota refills for a sustained rate of `requests_per_second`
fn replenish_interval_ms(requests_per_second: u32) -> u64 {
    (1000 / u64::from(requests_per_second.max(1))).max(1)
}

/// True when the configured origins allow every origin
fn allows_any_origin(config: &CorsConfig) -> bool {
    config.allowed_origins.is_empty() || config.allowed_origins.iter().any(|o| o == "*")
}

/// Create CORS layer from configuration
fn create_cors_layer_from_config(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let base_layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            header::HeaderName::from_static("x-ratelimit-limit"),
            header::HeaderName::from_static("x-ratelimit-remaining"),
            header::HeaderName::from_static("x-ratelimit-reset"),
        ]);

    if allows_any_origin(config) {
        if is_production {
            tracing::warn!(
                "CORS: Allowing any origin in production. \
                 Set CORS_ORIGINS to a comma-separated list to restrict it."
            );
        }
        return base_layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    tracing::info!("CORS: Allowing {} configured origins", origins.len());
    base_layer.allow_origin(AllowOrigin::list(origins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::HeaderMap;
    use serde_json::{json, Value};

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn cors(origins: &[&str]) -> CorsConfig {
        CorsConfig {
            allowed_origins: origins.iter().map(|o| (*o).to_string()).collect(),
        }
    }

    #[test]
    fn test_replenish_interval() {
        assert_eq!(replenish_interval_ms(50), 20);
        assert_eq!(replenish_interval_ms(1), 1000);
        assert_eq!(replenish_interval_ms(0), 1000);
        assert_eq!(replenish_interval_ms(5000), 1);
    }

    #[test]
    fn test_wildcard_origin() {
        assert!(allows_any_origin(&cors(&[])));
        assert!(allows_any_origin(&cors(&["*"])));
        assert!(!allows_any_origin(&cors(&["https://admin.example.com"])));
    }

    #[tokio::test]
    async fn test_timeout_status_gets_envelope() {
        let mut bare = Response::new(Body::empty());
        *bare.status_mut() = StatusCode::REQUEST_TIMEOUT;
        bare.headers_mut()
            .insert(REQUEST_ID_HEADER, HeaderValue::from_static("req-1"));

        let response = envelope_bare_errors(bare).await;
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-1");
        assert_eq!(
            body_json(response).await,
            json!({"code": 408, "message": "Request timed out"})
        );
    }

    #[tokio::test]
    async fn test_bodied_responses_pass_through() {
        let ok = envelope_bare_errors(Response::new(Body::empty())).await;
        assert_eq!(ok.status(), StatusCode::OK);

        let handled = envelope_bare_errors(ApiError::Forbidden.into_response()).await;
        assert_eq!(handled.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(handled).await["message"], "Insufficient permissions");
    }

    #[tokio::test]
    async fn test_rate_limit_response_envelope() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-after", HeaderValue::from_static("3"));

        let response = rate_limit_response(GovernorError::TooManyRequests {
            wait_time: 3,
            headers: Some(headers),
        });
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()["x-ratelimit-after"], "3");
        assert_eq!(
            body_json(response).await,
            json!({"code": 429, "message": "Too many requests, retry in 3s"})
        );
    }
}
