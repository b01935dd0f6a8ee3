//! Age derivation and the exclusive age window used by the rejection filter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::PopulationError;

/// Mean Gregorian year length in days.
pub const DAYS_PER_YEAR: f64 = 365.2425;

/// Whole years elapsed between `birthdate` and `today`.
///
/// Birthdates after `today` yield negative ages.
pub fn age_in_years(birthdate: NaiveDate, today: NaiveDate) -> i64 {
    let days = (today - birthdate).num_days();
    (days as f64 / DAYS_PER_YEAR).floor() as i64
}

/// Open interval of accepted ages; both bounds are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeWindow {
    pub min_exclusive: i64,
    pub max_exclusive: i64,
}

impl Default for AgeWindow {
    fn default() -> Self {
        Self {
            min_exclusive: 18,
            max_exclusive: 99,
        }
    }
}

impl AgeWindow {
    pub fn new(min_exclusive: i64, max_exclusive: i64) -> Result<Self, PopulationError> {
        let window = Self {
            min_exclusive,
            max_exclusive,
        };
        window.validate()?;
        Ok(window)
    }

    pub fn validate(&self) -> Result<(), PopulationError> {
        if self.min_exclusive.saturating_add(1) >= self.max_exclusive {
            return Err(PopulationError::InvalidAgeWindow {
                min_exclusive: self.min_exclusive,
                max_exclusive: self.max_exclusive,
            });
        }
        Ok(())
    }

    pub fn contains(&self, age: i64) -> bool {
        self.min_exclusive < age && age < self.max_exclusive
    }
}
