//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. A `.env` file in the working directory is read first, if present.
//!
//! | Variable             | Default        |
//! |----------------------|----------------|
//! | `PORT`               | `8080`         |
//! | `DB_PATH`            | `./kasir.db`   |
//! | `DB_MAX_CONNECTIONS` | `25`           |
//! | `API_ENV`            | `development`  |
//! | `API_VERSION`        | `1.0.0`        |
//! | `API_MESSAGE`        | `simple API`   |
//! | `CORS_ORIGINS`       | `*`            |

use std::env;

use axum::http::HeaderValue;
use kasir_db::DbConfig;

/// API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// HTTP listen port
    pub port: u16,

    /// SQLite database file
    pub db_path: String,

    /// Pool size
    pub db_max_connections: u32,

    /// Reported by `/api/info`
    pub environment: String,

    /// Reported by `/api/info`
    pub version: String,

    /// Reported by `/api/info`
    pub message: String,

    /// Allowed CORS origins
    pub cors_origins: CorsOrigins,
}

/// Origins allowed to call the API from a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `*` anywhere in the list
    Any,

    /// Exact origins, already validated as header values
    List(Vec<HeaderValue>),
}

impl CorsOrigins {
    /// Parses a comma-separated origin list.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let origins: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .collect();

        if origins.is_empty() || origins.contains(&"*") {
            return Ok(CorsOrigins::Any);
        }

        origins
            .into_iter()
            .map(|o| {
                HeaderValue::from_str(o)
                    .map_err(|_| ConfigError::InvalidValue("CORS_ORIGINS".to_string()))
            })
            .collect::<Result<_, _>>()
            .map(CorsOrigins::List)
    }
}

impl ApiConfig {
    /// Load configuration from the process environment (and `.env`).
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| -> String {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let config = ApiConfig {
            port: get("PORT", "8080")
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,

            db_path: get("DB_PATH", "./kasir.db"),

            db_max_connections: get("DB_MAX_CONNECTIONS", "25")
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()))?,

            environment: get("API_ENV", "development"),

            version: get("API_VERSION", "1.0.0"),

            message: get("API_MESSAGE", "simple API"),

            cors_origins: CorsOrigins::parse(&get("CORS_ORIGINS", "*"))?,
        };

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()));
        }

        Ok(config)
    }

    /// Socket address to bind, on all interfaces.
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Database settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.db_path).max_connections(self.db_max_connections)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
