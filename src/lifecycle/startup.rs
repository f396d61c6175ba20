//! Startup orchestration.

use std::io;
use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::GatewayConfig;
use crate::http::HttpServer;
use crate::observability::metrics;
use crate::upstream::ClientError;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid metrics address `{0}`")]
    MetricsAddress(String),

    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}

/// A server with its listener, ready to `run`.
pub struct Started {
    pub server: HttpServer,
    pub listener: TcpListener,
    pub local_addr: SocketAddr,
}

/// Initialize subsystems in dependency order and bind the listener.
pub async fn start(config: GatewayConfig) -> Result<Started, StartupError> {
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|_| StartupError::MetricsAddress(config.observability.metrics_address.clone()))?;
        metrics::init_metrics(addr)?;
    }

    let bind_address = config.listener.bind_address.clone();
    let server = HttpServer::new(config)?;

    let listener = TcpListener::bind(&bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: bind_address.clone(),
            source,
        })?;
    let local_addr = listener.local_addr().map_err(|source| StartupError::Bind {
        address: bind_address,
        source,
    })?;

    tracing::info!(address = %local_addr, "Listening for connections");

    Ok(Started {
        server,
        listener,
        local_addr,
    })
}
