//! # Bloglist Core
//!
//! Core types, errors, and utilities for the Bloglist API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: Salted password hashing and verification
//! - [`validation`]: Validation failures produced while normalizing payloads
//!
//! # Example
//!
//! ```ignore
//! use bloglist_core::errors::AppError;
//! use bloglist_core::password::hash_password;
//!
//! let error = AppError::not_found(anyhow::anyhow!("blog not found"));
//! let hash = hash_password("secure_password")?;
//! ```

pub mod errors;
pub mod password;
pub mod validation;

pub use errors::AppError;
pub use password::{PASSWORD_HASH_COST, hash_password, verify_password};
pub use validation::{ValidationFailure, first_failure};
