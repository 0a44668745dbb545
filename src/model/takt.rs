//! Takt time: the longest a unit may spend at any station if the line is to
//! keep up with demand.
//!
//! Takt time = available working seconds per day / units demanded per day.
//! With 8 hours and 100 units that is 8 / 100 * 3600 = 288 seconds.

use crate::error::LineError;
use crate::model::policy::InputPolicy;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Seconds available per unit
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TaktTime(f64);

impl TaktTime {
    /// Derive takt time from working hours per day and daily demand.
    ///
    /// Zero demand is a division error. Under a strict policy both inputs must
    /// be positive, so zero demand is reported as an invalid value instead.
    pub fn from_demand(
        working_hours_per_day: f64,
        daily_demand: f64,
        policy: InputPolicy,
    ) -> Result<Self, LineError> {
        policy.check_positive("working hours per day", working_hours_per_day)?;
        policy.check_positive("daily demand", daily_demand)?;

        if daily_demand == 0.0 {
            return Err(LineError::DivisionByZero("daily demand"));
        }

        Ok(TaktTime((working_hours_per_day / daily_demand) * SECONDS_PER_HOUR))
    }

    #[cfg(test)]
    pub fn from_seconds(seconds: f64) -> Self {
        TaktTime(seconds)
    }

    pub fn seconds(&self) -> f64 {
        self.0
    }

    /// Operators needed so `station_total` fits within takt: a ceiling division.
    ///
    /// A ratio that is not finite or does not fit an `i64` is an error.
    pub fn operators_for(&self, station_total: f64) -> Result<i64, LineError> {
        if self.0 == 0.0 {
            return Err(LineError::DivisionByZero("takt time"));
        }
        let operators = (station_total / self.0).ceil();
        if !operators.is_finite() {
            return Err(LineError::invalid(
                "operator count",
                format!("{} / {} is not a finite number", station_total, self.0),
            ));
        }
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if operators < i64::MIN as f64 || operators >= i64::MAX as f64 {
            return Err(LineError::invalid(
                "operator count",
                format!("{} operators is out of range", operators),
            ));
        }
        Ok(operators as i64)
    }

    /// Split a station total into the part that fits within takt and the overage.
    ///
    /// Returns `(within, over)` where `within = min(total, takt)` and
    /// `over = max(0, total - takt)`.
    pub fn split(&self, station_total: f64) -> (f64, f64) {
        let within = station_total.min(self.0);
        let over = (station_total - self.0).max(0.0);
        (within, over)
    }

    pub fn is_exceeded_by(&self, station_total: f64) -> bool {
        station_total > self.0
    }
}
