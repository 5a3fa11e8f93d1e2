//! Application state for the hours review API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ReviewConfig;

/// Shared application state.
///
/// Holds the default review settings that query parameters override per
/// request.
#[derive(Clone)]
pub struct AppState {
    /// The loaded review configuration.
    config: Arc<ReviewConfig>,
}

impl AppState {
    /// Creates a new application state with the given default settings.
    pub fn new(config: ReviewConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the default review settings.
    pub fn config(&self) -> &ReviewConfig {
        &self.config
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ReviewConfig::default())
    }
}
