use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use gateview_application::ErrorLogSettings;
use gateview_core::AppError;
use tracing_subscriber::EnvFilter;

const DEFAULT_APP_NAME: &str = "gateview_control_center_backend";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub app_name: String,
    pub app_env: String,
    pub api_prefix: String,
    pub api_host: String,
    pub api_port: u16,
    pub frontend_url: String,
    pub dev_auth_token: String,
    pub error_log_dir: PathBuf,
    pub error_log_settings: ErrorLogSettings,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_owned());

        let api_prefix = var("API_V1_PREFIX", "/api/v1");
        if !api_prefix.starts_with('/') || api_prefix.ends_with('/') {
            return Err(AppError::Validation(format!(
                "API_V1_PREFIX must start with '/' and must not end with '/', got '{api_prefix}'"
            )));
        }

        let api_port = parse_env(&lookup, "API_PORT", 8000_u16)?;
        let default_limit = parse_env(&lookup, "ERROR_LOG_DEFAULT_LIMIT", 50_usize)?;
        let max_limit = parse_env(&lookup, "ERROR_LOG_MAX_LIMIT", 1000_usize)?;
        if default_limit == 0 || max_limit == 0 {
            return Err(AppError::Validation(
                "ERROR_LOG_DEFAULT_LIMIT and ERROR_LOG_MAX_LIMIT must be positive".to_owned(),
            ));
        }

        Ok(Self {
            app_name: var("APP_NAME", DEFAULT_APP_NAME),
            app_env: var("APP_ENV", ""),
            api_prefix,
            api_host: var("API_HOST", "127.0.0.1"),
            api_port,
            frontend_url: var("FRONTEND_URL", "http://localhost:5173"),
            dev_auth_token: var("DEV_AUTH_TOKEN", ""),
            error_log_dir: PathBuf::from(var("ERROR_LOG_DIR", "logs/mediamtx_errors")),
            error_log_settings: ErrorLogSettings {
                default_limit,
                max_limit,
            },
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn parse_env<F, T>(lookup: &F, name: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name).filter(|value| !value.trim().is_empty()) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|error| AppError::Validation(format!("invalid {name}: {error}"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::Path;

    use gateview_core::AppError;

    use super::ApiConfig;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ApiConfig, AppError> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        ApiConfig::from_lookup(|name| values.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let Ok(config) = config_from(&[]) else {
            panic!("empty environment must load");
        };

        assert_eq!(config.app_name, "gateview_control_center_backend");
        assert_eq!(config.api_prefix, "/api/v1");
        assert_eq!(config.api_port, 8000);
        assert_eq!(config.frontend_url, "http://localhost:5173");
        assert!(config.dev_auth_token.is_empty());
        assert_eq!(config.error_log_dir, Path::new("logs/mediamtx_errors"));
        assert_eq!(config.error_log_settings.default_limit, 50);
        assert_eq!(config.error_log_settings.max_limit, 1000);
        assert_eq!(
            config.socket_address().map(|address| address.to_string()).ok(),
            Some("127.0.0.1:8000".to_owned())
        );
    }

    #[test]
    fn overrides_are_read() {
        let Ok(config) = config_from(&[
            ("API_V1_PREFIX", "/api/v2"),
            ("API_PORT", "9100"),
            ("DEV_AUTH_TOKEN", "dev-secret"),
            ("ERROR_LOG_DIR", "/var/log/gateview"),
            ("ERROR_LOG_MAX_LIMIT", "200"),
        ]) else {
            panic!("overrides must load");
        };

        assert_eq!(config.api_prefix, "/api/v2");
        assert_eq!(config.api_port, 9100);
        assert_eq!(config.dev_auth_token, "dev-secret");
        assert_eq!(config.error_log_dir, Path::new("/var/log/gateview"));
        assert_eq!(config.error_log_settings.max_limit, 200);
    }

    #[test]
    fn invalid_values_are_validation_errors() {
        for pairs in [
            [("API_PORT", "not-a-port")],
            [("API_V1_PREFIX", "api/v1")],
            [("ERROR_LOG_DEFAULT_LIMIT", "0")],
        ] {
            assert!(
                matches!(config_from(&pairs), Err(AppError::Validation(_))),
                "{pairs:?}"
            );
        }
    }

    #[test]
    fn unparseable_host_fails_socket_address() {
        let Ok(config) = config_from(&[("API_HOST", "localhost:80")]) else {
            panic!("host is only checked when binding");
        };
        assert!(config.socket_address().is_err());
    }
}
