//! Request types for the hours review API.
//!
//! Both endpoints take the CSV export as the raw request body; the settings
//! for a run arrive as query parameters layered over the server defaults.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::RoundingMode;
use crate::config::ReviewConfig;
use crate::error::ReviewResult;

/// Query parameters for `POST /review`.
///
/// Every parameter is optional; absent ones keep the server default.
///
/// # Example
///
/// ```text
/// POST /review?minimum_hours=7.5&rounding=15min&include_travel_time=false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReviewQuery {
    /// Overrides the minimum hours threshold.
    #[serde(default)]
    pub minimum_hours: Option<Decimal>,
    /// Overrides the overtime hours threshold.
    #[serde(default)]
    pub overtime_hours: Option<Decimal>,
    /// Overrides the rounding mode (`none`, `15min`, `30min`, `hour`).
    #[serde(default)]
    pub rounding: Option<RoundingMode>,
    /// Overrides whether travel time counts towards worked hours.
    #[serde(default)]
    pub include_travel_time: Option<bool>,
}

impl ReviewQuery {
    /// Layers the query over `defaults` and validates the result.
    ///
    /// # Example
    ///
    /// ```
    /// use hours_review::api::ReviewQuery;
    /// use hours_review::config::ReviewConfig;
    /// use rust_decimal::Decimal;
    ///
    /// let query = ReviewQuery {
    ///     overtime_hours: Some(Decimal::from(10)),
    ///     ..ReviewQuery::default()
    /// };
    /// let config = query.apply(&ReviewConfig::default())?;
    /// assert_eq!(config.minimum_hours, Decimal::from(8));
    /// assert_eq!(config.overtime_hours, Decimal::from(10));
    /// # Ok::<(), hours_review::error::ReviewError>(())
    /// ```
    pub fn apply(&self, defaults: &ReviewConfig) -> ReviewResult<ReviewConfig> {
        let config = ReviewConfig {
            minimum_hours: self.minimum_hours.unwrap_or(defaults.minimum_hours),
            overtime_hours: self.overtime_hours.unwrap_or(defaults.overtime_hours),
            rounding: self.rounding.unwrap_or(defaults.rounding),
            include_travel_time: self
                .include_travel_time
                .unwrap_or(defaults.include_travel_time),
            ..defaults.clone()
        };
        config.validate()?;
        Ok(config)
    }
}

/// Query parameters for `POST /export`.
///
/// # Example
///
/// ```text
/// POST /export?include_travel_time=false&technicians=Tech%20A,Tech%20B
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportQuery {
    /// Overrides whether travel time rows are written.
    #[serde(default)]
    pub include_travel_time: Option<bool>,
    /// Comma-separated technician names to keep. Absent keeps everyone.
    #[serde(default)]
    pub technicians: Option<String>,
}

impl ExportQuery {
    /// Layers the query over `defaults`.
    pub fn apply(&self, defaults: &ReviewConfig) -> ReviewConfig {
        ReviewConfig {
            include_travel_time: self
                .include_travel_time
                .unwrap_or(defaults.include_travel_time),
            ..defaults.clone()
        }
    }

    /// The technician filter, split on commas with blanks dropped.
    ///
    /// An empty list (e.g. `technicians=`) selects nobody, matching an
    /// empty multi-select.
    pub fn technician_filter(&self) -> Option<Vec<String>> {
        self.technicians.as_ref().map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReviewError;

    #[test]
    fn test_empty_review_query_keeps_defaults() {
        let defaults = ReviewConfig::default();
        let config = ReviewQuery::default().apply(&defaults).unwrap();
        assert_eq!(config, defaults);
    }

    #[test]
    fn test_review_query_overrides() {
        let query = ReviewQuery {
            minimum_hours: Some(Decimal::new(75, 1)),
            overtime_hours: None,
            rounding: Some(RoundingMode::Hour),
            include_travel_time: Some(false),
        };
        let config = query.apply(&ReviewConfig::default()).unwrap();

        assert_eq!(config.minimum_hours, Decimal::new(75, 1));
        assert_eq!(config.overtime_hours, Decimal::from(8));
        assert_eq!(config.rounding, RoundingMode::Hour);
        assert!(!config.include_travel_time);
    }

    #[test]
    fn test_review_query_rejects_negative_threshold() {
        let query = ReviewQuery {
            overtime_hours: Some(Decimal::from(-2)),
            ..ReviewQuery::default()
        };
        let result = query.apply(&ReviewConfig::default());
        assert!(matches!(result, Err(ReviewError::InvalidConfig { .. })));
    }

    #[test]
    fn test_technician_filter_splits_and_trims() {
        let query = ExportQuery {
            include_travel_time: None,
            technicians: Some("Tech A, Tech B,,".to_string()),
        };
        assert_eq!(
            query.technician_filter(),
            Some(vec!["Tech A".to_string(), "Tech B".to_string()])
        );
    }

    #[test]
    fn test_technician_filter_absent_is_none() {
        assert_eq!(ExportQuery::default().technician_filter(), None);
    }

    #[test]
    fn test_technician_filter_empty_selects_nobody() {
        let query = ExportQuery {
            include_travel_time: None,
            technicians: Some(String::new()),
        };
        assert_eq!(query.technician_filter(), Some(vec![]));
    }

    #[test]
    fn test_export_query_travel_override() {
        let query = ExportQuery {
            include_travel_time: Some(false),
            technicians: None,
        };
        assert!(!query.apply(&ReviewConfig::default()).include_travel_time);
    }
}
