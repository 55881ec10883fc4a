//! HTTP server setup and request handling.
//!
//! # Responsibilities
//! - Create the Axum Router with the dashboard and proxied routes
//! - Wire up middleware (permissive CORS, tracing)
//! - Bind the server to a listener with graceful shutdown
//! - Translate upstream results into client responses

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeFile,
    trace::TraceLayer,
};

use crate::config::ProxyConfig;
use crate::upstream::{Forwarder, UpstreamError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub forwarder: Arc<Forwarder>,
}

/// HTTP server for the monitor proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Result<Self, UpstreamError> {
        let forwarder = Arc::new(Forwarder::new(&config.upstream)?);
        let state = AppState { forwarder };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Every proxied route is registered for GET and OPTIONS; a plain
    /// OPTIONS is forwarded like any other method, while genuine CORS
    /// preflights are answered by the CORS layer before reaching the
    /// handler.
    fn build_router(config: &ProxyConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route_service("/", ServeFile::new(&config.static_site.index_path));

        for route in &config.upstream.routes {
            router = router.route(route, get(proxy_handler).options(proxy_handler));
        }

        router
            .with_state(state)
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }

    /// Get a clone of the built router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Main proxy handler.
/// Forwards the inbound method, path, and query to the backend and relays
/// whatever comes back; a transport failure becomes a 502 JSON error.
async fn proxy_handler(State(state): State<AppState>, request: Request) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let query = request.uri().query().map(ToString::to_string);

    tracing::debug!(
        method = %method,
        path = %path,
        "Forwarding request to backend"
    );

    match state
        .forwarder
        .forward(method, &path, query.as_deref())
        .await
    {
        Ok(upstream) => (
            upstream.status,
            [(header::CONTENT_TYPE, upstream.content_type)],
            upstream.body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(path = %path, error = %e, "Upstream request failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
