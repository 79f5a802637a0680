use crate::Environment;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// `None` when no URL is configured for the active environment.
    pub url: Option<String>,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// The test environment reads `TEST_DATABASE_URL`, every other
    /// environment reads `DATABASE_URL`.
    pub fn from_lookup<F>(environment: Environment, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let url_key = if environment.is_test() {
            "TEST_DATABASE_URL"
        } else {
            "DATABASE_URL"
        };

        Self {
            url: lookup(url_key).filter(|url| !url.trim().is_empty()),
            max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        }
    }
}
