use std::sync::Arc;

use anyhow::Context;
use bloglist_config::{AppConfig, CorsConfig};
use bloglist_db::{BlogStore, MemoryStore, PgStore, UserStore, init_db_pool};
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn BlogStore>,
    pub users: Arc<dyn UserStore>,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        blogs: Arc<dyn BlogStore>,
        users: Arc<dyn UserStore>,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            blogs,
            users,
            cors_config,
        }
    }

    pub fn postgres(store: PgStore, cors_config: CorsConfig) -> Self {
        let store = Arc::new(store);
        Self::new(store.clone(), store, cors_config)
    }

    pub fn in_memory(cors_config: CorsConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(store.clone(), store, cors_config)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("cors_config", &self.cors_config)
            .finish_non_exhaustive()
    }
}

/// Connects to PostgreSQL and applies the schema when a database URL is
/// configured, otherwise falls back to the in-memory store.
pub async fn init_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    if config.database.url.is_none() {
        warn!(
            environment = config.environment.as_str(),
            "No database URL configured, using in-memory storage"
        );
        return Ok(AppState::in_memory(config.cors.clone()));
    }

    let pool = init_db_pool(&config.database)
        .await
        .context("Failed to connect to database")?;
    info!("Connected to PostgreSQL");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to apply database schema")?;

    Ok(AppState::postgres(PgStore::new(pool), config.cors.clone()))
}
