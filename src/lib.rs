//! # Bloglist API
//!
//! A REST API built with Rust, Axum, and PostgreSQL for bookmarking blog
//! posts and registering users.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── modules/          # Feature modules
//! │   ├── blogs/       # List, create, update likes, delete
//! │   └── users/       # Registration with bcrypt password hashing
//! ├── utils/           # Aggregate helpers over blog lists
//! ├── docs.rs          # OpenAPI document
//! ├── extract.rs       # JSON body extractor with JSON error bodies
//! ├── logging.rs       # Subscriber setup and request logging middleware
//! ├── router.rs        # Main application router
//! └── state.rs         # Shared application state
//! ```
//!
//! Each feature module follows the same structure:
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: Validation, normalization and store calls
//! - `model.rs`: Re-exports of the DTOs and entities from `bloglist-models`
//! - `router.rs`: Axum router configuration
//!
//! ## Endpoints
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | GET | `/api/blogs` | 200 |
//! | POST | `/api/blogs` | 201 |
//! | PUT, PATCH | `/api/blogs/{id}` | 200 |
//! | DELETE | `/api/blogs/{id}` | 204, also for unknown ids |
//! | GET | `/api/users` | 200 |
//! | POST | `/api/users` | 201 |
//!
//! Failures respond with `{"error": "<reason>"}`.
//!
//! ## Storage
//!
//! Handlers only see the [`bloglist_db::BlogStore`] and
//! [`bloglist_db::UserStore`] traits. With a database URL configured the
//! server uses PostgreSQL; without one it keeps everything in memory.

pub mod docs;
pub mod extract;
pub mod logging;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;

// Re-export workspace crates for convenience
pub use bloglist_config;
pub use bloglist_core;
pub use bloglist_db;
pub use bloglist_models;
