//! Configuration loading from disk and the environment.

use std::env;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Overrides the listener bind address.
pub const ENV_BIND: &str = "CLUB_GATEWAY_BIND";
/// Overrides the upstream base URL.
pub const ENV_UPSTREAM_URL: &str = "CLUB_GATEWAY_UPSTREAM_URL";
/// Overrides the log level.
pub const ENV_LOG: &str = "CLUB_GATEWAY_LOG";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Values given on the command line. They win over the file and the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind_address: Option<String>,
    pub upstream_url: Option<String>,
}

impl ConfigOverrides {
    fn apply(&self, config: &mut GatewayConfig) {
        if let Some(bind) = &self.bind_address {
            config.listener.bind_address = bind.clone();
        }
        if let Some(url) = &self.upstream_url {
            config.upstream.base_url = url.clone();
        }
    }
}

/// Load and validate configuration.
///
/// Layers, lowest first: defaults, the TOML file at `path` (if any),
/// `CLUB_GATEWAY_*` variables, `overrides`.
pub fn load_config(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<GatewayConfig, ConfigError> {
    let mut config = match path {
        Some(path) => parse_config(&fs::read_to_string(path)?)?,
        None => GatewayConfig::default(),
    };
    apply_env_overrides(&mut config);
    overrides.apply(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Parse a TOML document without validating it.
pub fn parse_config(content: &str) -> Result<GatewayConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Apply `CLUB_GATEWAY_*` variables on top of a parsed config.
pub fn apply_env_overrides(config: &mut GatewayConfig) {
    if let Ok(bind) = env::var(ENV_BIND) {
        config.listener.bind_address = bind;
    }
    if let Ok(url) = env::var(ENV_UPSTREAM_URL) {
        config.upstream.base_url = url;
    }
    if let Ok(level) = env::var(ENV_LOG) {
        config.observability.log_level = level;
    }
}

/// The `CLUB_GATEWAY_*` variables currently set, for logging once the
/// subscriber is installed.
pub fn active_env_overrides() -> Vec<&'static str> {
    [ENV_BIND, ENV_UPSTREAM_URL, ENV_LOG]
        .into_iter()
        .filter(|name| env::var_os(name).is_some())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let config = parse_config(
            r#"
            [upstream]
            base_url = "https://backend.internal/api/v2"

            [timeouts]
            request_secs = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.upstream.base_url, "https://backend.internal/api/v2");
        assert_eq!(config.upstream.connect_timeout_secs, 5);
        assert_eq!(config.timeouts.request_secs, 10);
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = parse_config("[upstream\nbase_url = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_config_rejects_invalid_file() {
        let path = env::temp_dir().join(format!("club-gateway-{}.toml", uuid::Uuid::new_v4()));
        fs::write(&path, "[timeouts]\nrequest_secs = 0\n").unwrap();

        let result = load_config(Some(&path), &ConfigOverrides::default());
        let _ = fs::remove_file(&path);

        match result {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors.contains(&ValidationError::ZeroValue("timeouts.request_secs")));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(
            Some(Path::new("/definitely/not/here.toml")),
            &ConfigOverrides::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_command_line_overrides_win_over_file() {
        let path = env::temp_dir().join(format!("club-gateway-{}.toml", uuid::Uuid::new_v4()));
        fs::write(
            &path,
            "[listener]\nbind_address = \"127.0.0.1:4000\"\n\n[upstream]\nbase_url = \"http://file:8080/api\"\n",
        )
        .unwrap();

        let overrides = ConfigOverrides {
            bind_address: Some("127.0.0.1:5000".into()),
            upstream_url: Some("http://cli:9000/api/v1".into()),
        };
        let result = load_config(Some(&path), &overrides);
        let _ = fs::remove_file(&path);

        let config = result.unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:5000");
        assert_eq!(config.upstream.base_url, "http://cli:9000/api/v1");
    }

    #[test]
    fn test_overrides_are_validated() {
        let overrides = ConfigOverrides {
            bind_address: Some("not-an-address".into()),
            upstream_url: None,
        };
        match load_config(None, &overrides) {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors.contains(&ValidationError::InvalidBindAddress(
                    "not-an-address".into()
                )));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
