//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading review
//! settings from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ReviewError, ReviewResult};

use super::types::ReviewConfig;

/// Loads and provides access to review configuration.
///
/// # File Format
///
/// ```yaml
/// minimum_hours: 8.0
/// overtime_hours: 10.0
/// rounding: 15min          # none | 15min | 30min | hour
/// include_travel_time: true
/// work_week: [Mon, Tue, Wed, Thu, Fri]
/// date_order: day_first    # month_first | day_first
/// ```
///
/// Every key is optional.
///
/// # Example
///
/// ```no_run
/// use hours_review::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/review.yaml")?;
/// println!("Minimum hours: {}", loader.config().minimum_hours);
/// # Ok::<(), hours_review::error::ReviewError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ReviewConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML or unknown keys
    /// - A value fails validation (negative threshold, empty work week)
    pub fn load<P: AsRef<Path>>(path: P) -> ReviewResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ReviewError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml(&content).map_err(|err| match err {
            ReviewError::ConfigParseError { message, .. } => ReviewError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        debug!(path = %path_str, "Loaded review configuration");
        Ok(loader)
    }

    /// Parses configuration from YAML text.
    ///
    /// # Example
    ///
    /// ```
    /// use hours_review::config::ConfigLoader;
    /// use hours_review::calculation::RoundingMode;
    ///
    /// let loader = ConfigLoader::from_yaml("rounding: 30min\ninclude_travel_time: false\n")?;
    /// assert_eq!(loader.config().rounding, RoundingMode::HalfHour);
    /// assert!(!loader.config().include_travel_time);
    /// # Ok::<(), hours_review::error::ReviewError>(())
    /// ```
    pub fn from_yaml(content: &str) -> ReviewResult<Self> {
        // An empty document is "all defaults", not a parse error.
        let config: ReviewConfig = if content.trim().is_empty() {
            ReviewConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| ReviewError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?
        };

        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ReviewConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ReviewConfig {
        self.config
    }
}
