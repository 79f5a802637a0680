//! Shared utilities.
//!
//! - [`list_helper`]: Aggregates over blog collections

pub mod list_helper;
