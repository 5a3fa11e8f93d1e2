//! Hour rounding rule.
//!
//! Daily totals can be rounded to the nearest quarter hour, half hour or
//! whole hour before they are compared against thresholds. Rounding counts
//! whole units of the selected granularity and breaks ties towards the even
//! unit count (banker's rounding), so `7.125` hours in 15-minute mode is
//! 28.5 quarters, which rounds to 28 quarters, or `7.0` hours.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// The rounding granularity applied to daily totals.
///
/// # Example
///
/// ```
/// use hours_review::calculation::RoundingMode;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mode = RoundingMode::from_str("15 minutes").unwrap();
/// assert_eq!(mode, RoundingMode::QuarterHour);
/// assert_eq!(mode.apply(Decimal::from_str("7.1").unwrap()), Decimal::from(7));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundingMode {
    /// No rounding; rounded hours equal raw hours.
    #[default]
    #[serde(rename = "none", alias = "None")]
    None,
    /// Nearest 15 minutes (0.25 hours).
    #[serde(rename = "15min", alias = "15 minutes")]
    QuarterHour,
    /// Nearest 30 minutes (0.5 hours).
    #[serde(rename = "30min", alias = "30 minutes")]
    HalfHour,
    /// Nearest whole hour.
    #[serde(rename = "hour", alias = "Hour")]
    Hour,
}

impl RoundingMode {
    /// All modes, in the order a selector would list them.
    pub const ALL: [RoundingMode; 4] = [
        RoundingMode::None,
        RoundingMode::QuarterHour,
        RoundingMode::HalfHour,
        RoundingMode::Hour,
    ];

    /// Returns true unless this is [`RoundingMode::None`].
    pub fn is_enabled(self) -> bool {
        self != RoundingMode::None
    }

    /// Number of rounding units per hour, or `None` when rounding is disabled.
    fn units_per_hour(self) -> Option<Decimal> {
        match self {
            RoundingMode::None => None,
            RoundingMode::QuarterHour => Some(Decimal::from(4)),
            RoundingMode::HalfHour => Some(Decimal::from(2)),
            RoundingMode::Hour => Some(Decimal::ONE),
        }
    }

    /// Rounds `hours` to the nearest unit of this granularity.
    ///
    /// Ties go to the even unit count. [`RoundingMode::None`] returns the
    /// value unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use hours_review::calculation::RoundingMode;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let dec = |s: &str| Decimal::from_str(s).unwrap();
    ///
    /// assert_eq!(RoundingMode::QuarterHour.apply(dec("7.1")), dec("7.0"));
    /// assert_eq!(RoundingMode::HalfHour.apply(dec("7.3")), dec("7.5"));
    /// assert_eq!(RoundingMode::Hour.apply(dec("8.5")), dec("8"));
    /// assert_eq!(RoundingMode::None.apply(dec("7.1")), dec("7.1"));
    /// ```
    pub fn apply(self, hours: Decimal) -> Decimal {
        match self.units_per_hour() {
            None => hours,
            Some(units) => {
                let count = (hours * units)
                    .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
                count / units
            }
        }
    }

    /// The canonical configuration name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            RoundingMode::None => "none",
            RoundingMode::QuarterHour => "15min",
            RoundingMode::HalfHour => "30min",
            RoundingMode::Hour => "hour",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "none" => Ok(RoundingMode::None),
            "15min" | "15minutes" => Ok(RoundingMode::QuarterHour),
            "30min" | "30minutes" => Ok(RoundingMode::HalfHour),
            "hour" | "1hour" | "60min" => Ok(RoundingMode::Hour),
            _ => Err(format!(
                "unknown rounding mode '{}' (expected none, 15min, 30min or hour)",
                s
            )),
        }
    }
}

/// Rounds an optional hours value, passing a missing value through.
///
/// # Example
///
/// ```
/// use hours_review::calculation::{RoundingMode, round_hours};
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_hours(None, RoundingMode::Hour), None);
/// assert_eq!(
///     round_hours(Some(Decimal::new(75, 1)), RoundingMode::Hour),
///     Some(Decimal::from(8))
/// );
/// ```
pub fn round_hours(hours: Option<Decimal>, mode: RoundingMode) -> Option<Decimal> {
    hours.map(|h| mode.apply(h))
}
