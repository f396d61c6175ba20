//! Configuration validation.
//!
//! Serde handles the syntactic pass; this module checks that values make
//! sense together before the config is accepted. All errors are collected,
//! not just the first.

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a socket address")]
    InvalidBindAddress(String),

    #[error("upstream.base_url `{url}` is invalid: {reason}")]
    InvalidUpstreamUrl { url: String, reason: String },

    #[error("{0} must be greater than zero")]
    ZeroValue(&'static str),

    #[error("observability.metrics_address `{0}` is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if let Err(reason) = check_upstream_url(&config.upstream.base_url) {
        errors.push(ValidationError::InvalidUpstreamUrl {
            url: config.upstream.base_url.clone(),
            reason,
        });
    }

    if config.upstream.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroValue("upstream.connect_timeout_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroValue("timeouts.request_secs"));
    }
    if config.security.max_body_size == 0 {
        errors.push(ValidationError::ZeroValue("security.max_body_size"));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_upstream_url(raw: &str) -> Result<(), String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("unsupported scheme `{}`", other)),
    }
    if url.cannot_be_a_base() {
        return Err("cannot be used as a base".to_string());
    }
    if url.query().is_some() {
        return Err("must not carry a query string".to_string());
    }
    Ok(())
}
