//! Request middleware: request ids, access logging and CORS.

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{ConnectInfo, MatchedPath, Request};
use axum::http::request::Parts;
use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::middleware::Next;
use axum::response::Response;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tracing::Instrument;
use uuid::Uuid;

use crate::error::ErrorMessage;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// The id assigned to the current request, stored in request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

/// Reuse the caller's `X-Request-ID` or mint a UUID, and echo it back.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    req.extensions_mut().insert(RequestId(id.clone()));

    let span = tracing::info_span!("request", request_id = %id);
    let mut response = next.run(req).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// One structured event per request.
pub async fn access_log(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = req.method().clone();
    let raw_path = req.uri().path().to_string();
    let query = req
        .uri()
        .query()
        .filter(|q| !q.is_empty())
        .map(str::to_string);
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string());
    let request_id = req.extensions().get::<RequestId>().map(|r| r.0.clone());
    let client_ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip().to_string());
    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    let error = response.extensions().get::<ErrorMessage>().map(|m| m.0.as_str());

    if error.is_some() || response.status().is_server_error() {
        tracing::error!(
            status,
            method = %method,
            path = path.as_deref(),
            raw_path = raw_path.as_str(),
            client_ip = client_ip.as_deref(),
            user_agent = user_agent.as_deref(),
            latency_ms,
            request_id = request_id.as_deref(),
            query = query.as_deref(),
            error,
            "request failed"
        );
    } else {
        tracing::info!(
            status,
            method = %method,
            path = path.as_deref(),
            raw_path = raw_path.as_str(),
            client_ip = client_ip.as_deref(),
            user_agent = user_agent.as_deref(),
            latency_ms,
            request_id = request_id.as_deref(),
            query = query.as_deref(),
            "request completed"
        );
    }

    response
}

/// CORS policy for `allowed_origins`. A `"*"` entry mirrors any origin;
/// otherwise origins are compared case-insensitively.
pub fn cors(allowed_origins: &[String]) -> CorsLayer {
    let allow_origin = if allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::mirror_request()
    } else {
        let allowed = allowed_origins.to_vec();
        AllowOrigin::predicate(move |origin: &HeaderValue, _: &Parts| {
            origin
                .to_str()
                .map(|origin| allowed.iter().any(|a| a.eq_ignore_ascii_case(origin)))
                .unwrap_or(false)
        })
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
}
