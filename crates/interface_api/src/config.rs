//! API configuration
//!
//! Values come from `API_*` environment variables. `DATABASE_URL` is honoured
//! when `API_DATABASE_URL` is not set.

use std::time::Duration;

use serde::Deserialize;

/// Output format for log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// PostgreSQL connection string; claims routes fail without it
    pub database_url: Option<String>,
    /// Log level
    pub log_level: String,
    /// Log line format
    pub log_format: LogFormat,
    /// Upper bound on pooled database connections
    pub db_max_connections: u32,
    /// Seconds a request waits for a database connection before failing
    pub db_acquire_timeout_secs: u64,
    /// Allowed CORS origins; empty allows any origin
    pub cors_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: None,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            db_max_connections: 10,
            db_acquire_timeout_secs: 5,
            cors_origins: Vec::new(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let config = Self::from_source(Self::environment())?;
        Ok(config.with_database_fallback(std::env::var("DATABASE_URL").ok()))
    }

    /// Loads configuration from an explicit environment source
    pub fn from_source(source: config::Environment) -> Result<Self, config::ConfigError> {
        let config: Self = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;
        Ok(config.with_database_fallback(None))
    }

    /// The `API_*` environment source
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix("API")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("cors_origins")
    }

    /// Uses `fallback` when no database URL was configured; blank URLs count
    /// as unset
    pub fn with_database_fallback(mut self, fallback: Option<String>) -> Self {
        self.database_url = self
            .database_url
            .or(fallback)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());
        self
    }

    /// How long a request waits for a database connection
    pub fn db_acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.db_acquire_timeout_secs)
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
