//! Router assembly: routes plus the shared middleware stack.
//!
//! Layers, outermost first:
//!
//! ```text
//! request_id ─► access_log ─► catch_panic ─► cors ─► timeout ─► handler
//! ```

use axum::routing::get;
use axum::Router;
use ginmania_core::config::ServerConfig;
use ginmania_core::SearchService;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;

use crate::middleware;
use crate::routes;

/// State shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub search: SearchService,
}

#[allow(deprecated)]
pub fn build(cfg: &ServerConfig, search: SearchService) -> Router {
    Router::new()
        .route("/healthz", get(routes::healthz))
        .route("/gins", get(routes::gins))
        .with_state(AppState { search })
        .layer(TimeoutLayer::new(cfg.request_timeout()))
        .layer(middleware::cors(&cfg.allowed_origins))
        .layer(CatchPanicLayer::new())
        .layer(axum::middleware::from_fn(middleware::access_log))
        .layer(axum::middleware::from_fn(middleware::request_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use ginmania_core::config::Config;
    use tower::ServiceExt;

    #[tokio::test]
    async fn healthz_answers_with_request_id() {
        let app = build(&Config::defaults().server, SearchService::unconfigured());
        let response = app
            .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(middleware::REQUEST_ID_HEADER));
    }
}
