//! REST API exposure
//!
//! Consumes a `ServerHost` and produces an Axum `Router` carrying health
//! checks, entity routes, custom routes and the HTTP middleware stack.

use super::super::host::ServerHost;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// Returns a router with:
    /// - Health check routes
    /// - Entity routes
    /// - Custom routes
    /// - Request tracing, plus permissive CORS when configured
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Router {
        let health_routes = Self::health_routes();
        let entity_routes = host.entity_registry.build_routes();

        let mut app = health_routes.merge(entity_routes);

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        let app = app.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

        if host.config.server.cors_permissive {
            app.layer(CorsLayer::permissive())
        } else {
            app
        }
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "taskboard"
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::ServerBuilder;
    use axum::http::{HeaderName, HeaderValue};
    use axum_test::TestServer;

    fn server() -> TestServer {
        let host = Arc::new(ServerBuilder::new().build_host().unwrap());
        TestServer::try_new(RestExposure::build_router(host, Vec::new())).unwrap()
    }

    #[tokio::test]
    async fn test_health_routes() {
        let server = server();

        for path in ["/health", "/healthz"] {
            let response = server.get(path).await;
            response.assert_status_ok();
            response.assert_json(&json!({"status": "ok", "service": "taskboard"}));
        }
    }

    #[tokio::test]
    async fn test_permissive_cors_headers() {
        let server = server();

        let response = server
            .get("/health")
            .add_header(
                HeaderName::from_static("origin"),
                HeaderValue::from_static("http://localhost:5173"),
            )
            .await;

        let allow_origin = response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok());
        assert_eq!(allow_origin, Some("*"));
    }
}
