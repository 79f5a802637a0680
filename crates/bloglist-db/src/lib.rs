//! # Bloglist DB
//!
//! Storage layer for the Bloglist API.
//!
//! Handlers talk to storage only through the [`BlogStore`] and [`UserStore`]
//! traits. Two implementations exist:
//!
//! - [`PgStore`]: PostgreSQL through SQLx
//! - [`MemoryStore`]: process-local vectors, used when no database is
//!   configured and by the test suites
//!
//! # Example
//!
//! ```ignore
//! use bloglist_db::{PgStore, init_db_pool};
//!
//! let pool = init_db_pool(&config.database).await?;
//! let store = PgStore::new(pool);
//! ```

pub mod memory;
pub mod postgres;
pub mod store;

use bloglist_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use store::{BlogStore, DeleteOutcome, StoreError, UserStore};

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Initializes a PostgreSQL connection pool from the configured URL.
///
/// # Errors
///
/// Returns [`sqlx::Error::Configuration`] when no URL is configured, or the
/// connection error when the database cannot be reached.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let url = config
        .url
        .as_deref()
        .ok_or_else(|| sqlx::Error::Configuration("no database URL configured".into()))?;

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(url)
        .await
}
