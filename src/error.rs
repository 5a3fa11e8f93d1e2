//! Error types for the hours review engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can occur while loading an export, reading
//! configuration, or writing the detail export.

use thiserror::Error;

/// The main error type for the hours review engine.
///
/// Loading failures are fatal to the current run: no partial results are
/// produced. Aggregation and classification cannot fail.
///
/// # Example
///
/// ```
/// use hours_review::error::ReviewError;
///
/// let error = ReviewError::MissingColumn {
///     column: "Payroll Date".to_string(),
/// };
/// assert_eq!(error.to_string(), "Missing required column: Payroll Date");
/// ```
#[derive(Debug, Error)]
pub enum ReviewError {
    /// The input was not well-formed CSV.
    #[error("Malformed CSV at line {line}: {message}")]
    ParseError {
        /// The 1-based line in the input where the problem was found.
        line: u64,
        /// A description of the malformed condition.
        message: String,
    },

    /// A required column is absent from the header row.
    #[error("Missing required column: {column}")]
    MissingColumn {
        /// The name of the missing column.
        column: String,
    },

    /// A payroll date could not be interpreted as a calendar date.
    #[error("Unrecognised payroll date '{value}' at line {line}")]
    DateParseError {
        /// The 1-based line in the input holding the value.
        line: u64,
        /// The offending value.
        value: String,
    },

    /// A field held a value outside its allowed domain.
    #[error("Invalid '{field}' at line {line}: {message}")]
    DataValidationError {
        /// The 1-based line in the input holding the value.
        line: u64,
        /// The column name.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was rejected.
    #[error("Invalid configuration '{field}': {message}")]
    InvalidConfig {
        /// The configuration key.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// The detail export could not be written.
    #[error("Export failed: {message}")]
    ExportError {
        /// A description of the failure.
        message: String,
    },
}

impl ReviewError {
    /// Returns true for failures caused by the uploaded data itself.
    ///
    /// These are the errors a reviewer fixes by correcting and re-uploading
    /// the export.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ReviewError::ParseError { .. }
                | ReviewError::MissingColumn { .. }
                | ReviewError::DateParseError { .. }
                | ReviewError::DataValidationError { .. }
        )
    }
}

/// A type alias for Results that return ReviewError.
pub type ReviewResult<T> = Result<T, ReviewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_displays_line_and_message() {
        let error = ReviewError::ParseError {
            line: 4,
            message: "found record with 3 fields, but the previous record has 5 fields"
                .to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed CSV at line 4: found record with 3 fields, but the previous record has 5 fields"
        );
    }

    #[test]
    fn test_date_parse_error_names_value_and_line() {
        let error = ReviewError::DateParseError {
            line: 12,
            value: "31/31/2024".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unrecognised payroll date '31/31/2024' at line 12"
        );
    }

    #[test]
    fn test_data_validation_error_displays_field() {
        let error = ReviewError::DataValidationError {
            line: 3,
            field: "Duration (mins)".to_string(),
            message: "negative duration '-15'".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid 'Duration (mins)' at line 3: negative duration '-15'"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = ReviewError::ConfigNotFound {
            path: "/missing/review.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/review.yaml"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = ReviewError::InvalidConfig {
            field: "minimum_hours".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration 'minimum_hours': must not be negative"
        );
    }

    #[test]
    fn test_input_errors_are_distinguished_from_config_errors() {
        assert!(
            ReviewError::MissingColumn {
                column: "Type".to_string()
            }
            .is_input_error()
        );
        assert!(
            !ReviewError::ConfigNotFound {
                path: "x".to_string()
            }
            .is_input_error()
        );
        assert!(
            !ReviewError::ExportError {
                message: "x".to_string()
            }
            .is_input_error()
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<ReviewError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_column() -> ReviewResult<()> {
            Err(ReviewError::MissingColumn {
                column: "Type".to_string(),
            })
        }

        fn propagates_error() -> ReviewResult<()> {
            returns_missing_column()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
