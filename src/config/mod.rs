use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while resolving configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    pub security: SecurityConfig,
    pub mockapi: MockApiConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection.
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// `host:port` handed to the listener; see [`normalize_listen_addr`].
    pub listen_addr: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub admin_username: String,
    #[serde(skip_serializing)]
    pub admin_password: String,
    #[serde(skip_serializing)]
    pub jwt_secret: String,
    pub jwt_expiry_hours: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockApiConfig {
    pub project_key: String,
    /// Root of the product catalog, without a trailing slash.
    pub base_url: String,
}

const DEFAULT_JWT_EXPIRY_HOURS: u64 = 24;
/// One year.
const MAX_JWT_EXPIRY_HOURS: u64 = 24 * 365;

/// Accept the `:8080` shorthand for "all interfaces".
pub fn normalize_listen_addr(raw: &str) -> String {
    let raw = raw.trim();
    match raw.strip_prefix(':') {
        Some(port) => format!("0.0.0.0:{}", port),
        None => raw.to_string(),
    }
}

impl AppConfig {
    /// Resolve configuration from the process environment.
    ///
    /// Call this after `dotenvy` has loaded any `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary key lookup.
    ///
    /// Required keys that are absent or empty yield [`ConfigError::Missing`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let environment = match lookup("APP_ENV").as_deref() {
            Some("production") | Some("prod") => Environment::Production,
            Some("staging") | Some("stage") => Environment::Staging,
            _ => Environment::Development,
        };
        let (max_connections, connection_timeout) = match environment {
            Environment::Development => (10, 30),
            Environment::Staging => (20, 10),
            Environment::Production => (50, 5),
        };

        let database = DatabaseConfig {
            host: required("DB_HOST")?,
            port: parse("DB_PORT", required("DB_PORT")?)?,
            user: required("DB_USER")?,
            // A password-less local server is allowed, but the key must be set
            password: lookup("DB_PASS").ok_or(ConfigError::Missing("DB_PASS"))?,
            name: required("DB_NAME")?,
            max_connections: optional(&lookup, "DATABASE_MAX_CONNECTIONS")?.unwrap_or(max_connections),
            connection_timeout: optional(&lookup, "DATABASE_CONNECTION_TIMEOUT")?
                .unwrap_or(connection_timeout),
        };

        let api = ApiConfig {
            listen_addr: listen_addr(required("API_LISTEN_ADDR")?)?,
        };

        let security = SecurityConfig {
            admin_username: required("ADMIN_USER")?,
            admin_password: required("ADMIN_PASS")?,
            jwt_secret: required("JWT_SECRET_KEY")?,
            jwt_expiry_hours: expiry_hours(optional(&lookup, "JWT_EXPIRY_HOURS")?)?,
        };

        let project_key = required("MOCKAPI_PROJECT_KEY")?;
        let base_url = match lookup("MOCKAPI_BASE_URL").filter(|v| !v.is_empty()) {
            Some(url) => url,
            None => format!("https://{}.mockapi.io/api/v1", project_key),
        };
        url::Url::parse(&base_url).map_err(|_| ConfigError::Invalid {
            key: "MOCKAPI_BASE_URL",
            value: base_url.clone(),
        })?;
        let mockapi = MockApiConfig {
            project_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        };

        Ok(Self {
            environment,
            database,
            api,
            security,
            mockapi,
        })
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}

fn listen_addr(raw: String) -> Result<String, ConfigError> {
    let addr = normalize_listen_addr(&raw);
    // host:port with a numeric port; the host may be a name
    match addr.rsplit_once(':') {
        Some((host, port)) if !host.is_empty() && port.parse::<u16>().is_ok() => Ok(addr),
        _ => Err(ConfigError::Invalid {
            key: "API_LISTEN_ADDR",
            value: raw,
        }),
    }
}

fn expiry_hours(value: Option<u64>) -> Result<u64, ConfigError> {
    match value {
        None => Ok(DEFAULT_JWT_EXPIRY_HOURS),
        Some(hours) if (1..=MAX_JWT_EXPIRY_HOURS).contains(&hours) => Ok(hours),
        Some(hours) => Err(ConfigError::Invalid {
            key: "JWT_EXPIRY_HOURS",
            value: hours.to_string(),
        }),
    }
}

fn optional<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key).filter(|v| !v.is_empty()) {
        Some(value) => parse(key, value).map(Some),
        None => Ok(None),
    }
}
