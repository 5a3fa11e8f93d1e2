//! Configuration loading and management for the hours review engine.
//!
//! This module provides the [`ReviewConfig`] settings type and a loader that
//! reads it from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use hours_review::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/review.yaml").unwrap();
//! println!("Rounding: {}", config.config().rounding);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::ReviewConfig;
