//! # Bloglist Config
//!
//! Configuration types for the Bloglist API.
//!
//! Everything is read once at process start into an [`AppConfig`] that is
//! handed to the server, the storage layer and the logger. Handlers never
//! read the environment themselves.
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: Connection string selection and pool sizing
//!
//! # Environment Variables
//!
//! | Variable | Default |
//! |----------|---------|
//! | `APP_ENV` | `development` |
//! | `PORT` | `3003` |
//! | `DATABASE_URL` / `TEST_DATABASE_URL` | unset |
//! | `DATABASE_MAX_CONNECTIONS` | `5` |
//! | `ALLOWED_ORIGINS` | any origin |
//! | `LOG_LEVEL` | `info` (`error` under `APP_ENV=test`) |
//! | `LOG_FORMAT` | compact text, `json` for structured output |
//!
//! # Example
//!
//! ```ignore
//! use bloglist_config::AppConfig;
//!
//! let config = AppConfig::from_env();
//! println!("listening on {}", config.bind_address());
//! ```

use std::env;

pub mod cors;
pub mod database;

pub use cors::CorsConfig;
pub use database::DatabaseConfig;

const DEFAULT_PORT: u16 = 3003;

/// Deployment environment, selected with `APP_ENV`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl Environment {
    /// Unknown values fall back to [`Environment::Development`].
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "test" => Self::Test,
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_test(self) -> bool {
        self == Self::Test
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    pub format: LogFormat,
}

impl LogConfig {
    /// Informational output is suppressed in the test environment unless
    /// `LOG_LEVEL` says otherwise.
    pub fn from_lookup<F>(environment: Environment, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_level = if environment.is_test() { "error" } else { "info" };

        Self {
            level: lookup("LOG_LEVEL").unwrap_or_else(|| default_level.to_string()),
            format: match lookup("LOG_FORMAT").as_deref() {
                Some("json") => LogFormat::Json,
                _ => LogFormat::Compact,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: Environment,
    pub port: u16,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub log: LogConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("APP_ENV")
            .map(|value| Environment::parse(&value))
            .unwrap_or_default();

        Self {
            environment,
            port: lookup("PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            database: DatabaseConfig::from_lookup(environment, &lookup),
            cors: CorsConfig::from_lookup(&lookup),
            log: LogConfig::from_lookup(environment, &lookup),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
