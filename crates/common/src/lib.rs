//! Framewall Common Utilities
//!
//! Shared infrastructure for all Framewall crates:
//! - Error types and result aliases
//! - Tracing/logging initialization
//! - Configuration loading (the persisted frame-color preference)

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::*;
