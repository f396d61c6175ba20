//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the `/api` surface and `/health`
//! - Wire up middleware (tracing, timeout, body limit, request ID)
//! - Bind server to listener
//! - Stop accepting and drain on the shutdown signal

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::DefaultBodyLimit, routing::get, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::GatewayConfig;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::routes;
use crate::upstream::{BackendClient, ClientError};

/// Extra time the inbound timeout allows past the upstream deadline, so a
/// slow upstream is answered with the route's error envelope.
const INBOUND_GRACE: Duration = Duration::from_secs(1);

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<BackendClient>,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, ClientError> {
        let request_timeout = Duration::from_secs(config.timeouts.request_secs);
        let backend = Arc::new(BackendClient::new(&config.upstream, request_timeout)?);

        tracing::info!(
            upstream = %backend.base_url(),
            timeout_secs = config.timeouts.request_secs,
            routes = routes::all_routes().len() + 1,
            "Upstream client ready"
        );

        let state = AppState { backend };
        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .nest("/api", routes::api_router())
            .route("/health", get(health))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http())
                    .layer(propagate_request_id_layer())
                    .layer(DefaultBodyLimit::max(config.security.max_body_size))
                    .layer(TimeoutLayer::new(
                        Duration::from_secs(config.timeouts.request_secs) + INBOUND_GRACE,
                    )),
            )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
}

/// Liveness probe. Does not touch the upstream.
async fn health() -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
    })
}
