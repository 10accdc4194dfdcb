//! Document data model and read-only operations
//!
//! This module defines the page-indexed document representation consumed by
//! the analysis engine, plus querying and persistence helpers.

pub mod io;
pub mod models;
pub mod query;

// Re-export all models and query functions
pub use models::*;
pub use query::*;
