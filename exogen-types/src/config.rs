//! Configuration types shared across providers and caches.

use serde::{Deserialize, Serialize};

use crate::error::ExogenError;

/// Time horizon of a derived series.
///
/// Growth factors apply per period of `period_length` years counted from
/// `start_year`. The period containing `start_year` has index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Horizon {
    /// First year of the series; the baseline is drawn from this year.
    pub start_year: i32,
    /// Last year of the series (inclusive).
    pub stop_year: i32,
    /// Number of years one growth factor covers (>= 1).
    pub period_length: u32,
}

impl Default for Horizon {
    fn default() -> Self {
        Self {
            start_year: 2010,
            stop_year: 2100,
            period_length: 5,
        }
    }
}

impl Horizon {
    /// Horizon with the default period length.
    #[must_use]
    pub const fn new(start_year: i32, stop_year: i32) -> Self {
        Self {
            start_year,
            stop_year,
            period_length: 5,
        }
    }

    /// Replace the period length.
    #[must_use]
    pub const fn with_period_length(mut self, period_length: u32) -> Self {
        self.period_length = period_length;
        self
    }

    /// Check the horizon describes at least one year and a positive period.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `stop_year < start_year`, `period_length == 0`,
    /// or one period past `stop_year` does not fit in an `i32` year.
    pub fn validate(&self) -> Result<(), ExogenError> {
        if self.stop_year < self.start_year {
            return Err(ExogenError::InvalidArg(format!(
                "stop year {} precedes start year {}",
                self.stop_year, self.start_year
            )));
        }
        if self.period_length == 0 {
            return Err(ExogenError::InvalidArg(
                "period length must be at least one year".into(),
            ));
        }
        let fits = i32::try_from(self.period_length)
            .ok()
            .and_then(|len| self.stop_year.checked_add(len))
            .is_some();
        if !fits {
            return Err(ExogenError::InvalidArg(format!(
                "period length {} overflows the year range",
                self.period_length
            )));
        }
        Ok(())
    }

    /// Number of years in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::try_from(i64::from(self.stop_year) - i64::from(self.start_year) + 1).unwrap_or(0)
    }

    /// True when the horizon covers no years.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Period index of a calendar year in the reference tables.
    ///
    /// Integer division truncating toward zero, so years before `start_year`
    /// that fall less than one period short still map to period 0.
    #[must_use]
    pub fn period_of(&self, year: i32) -> i32 {
        let len = i32::try_from(self.period_length.max(1)).unwrap_or(i32::MAX);
        (year - self.start_year) / len
    }

    /// Period whose growth factor carries the series into `year`.
    ///
    /// Growth is attributed to the year just completed, so this is the
    /// period of `year - 1`.
    #[must_use]
    pub fn growth_period_into(&self, year: i32) -> i32 {
        self.period_of(year - 1)
    }

    /// Index of the last period needed to reach `stop_year`.
    #[must_use]
    pub fn last_growth_period(&self) -> i32 {
        if self.stop_year > self.start_year {
            self.growth_period_into(self.stop_year)
        } else {
            -1
        }
    }
}

/// Configuration for the GDP-per-capita provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomicConfig {
    /// Active model identifier (e.g. "low", "high").
    pub model: String,
    /// Active scenario identifier (e.g. "SSP3").
    pub scenario: String,
    /// Horizon of the derived series.
    pub horizon: Horizon,
}

/// Configuration for the population provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemographicConfig {
    /// Active scenario identifier (e.g. "SSP3").
    pub scenario: String,
    /// Horizon of the derived series.
    pub horizon: Horizon,
    /// Year of the regional population snapshot used as the baseline.
    ///
    /// `None` takes the year of the first regional row.
    pub baseline_year: Option<i32>,
}

/// Configuration for the space-time cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached regions. `None` never evicts.
    pub max_capacity: Option<u64>,
    /// Answer queries after the last year with the last value instead of
    /// failing with `OutOfRange`.
    pub clamp_above_range: bool,
}
