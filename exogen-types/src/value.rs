//! Annual values and dense annual series.

use serde::{Deserialize, Serialize};

/// A single annual observation, or an explicit marker that it is unknown.
///
/// `Missing` is sticky: any arithmetic involving it stays `Missing`, and a
/// computation that would produce NaN produces `Missing` instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Value {
    /// A defined value.
    Known(f64),
    /// No value could be derived.
    Missing,
}

impl Value {
    /// Wrap a float, mapping NaN to [`Value::Missing`].
    #[must_use]
    pub fn from_f64(v: f64) -> Self {
        if v.is_nan() { Self::Missing } else { Self::Known(v) }
    }

    /// Wrap an optional float; `None` and NaN become [`Value::Missing`].
    #[must_use]
    pub fn from_option(v: Option<f64>) -> Self {
        match v {
            Some(x) => Self::from_f64(x),
            None => Self::Missing,
        }
    }

    /// The defined value, if any.
    #[must_use]
    pub const fn known(self) -> Option<f64> {
        match self {
            Self::Known(v) => Some(v),
            Self::Missing => None,
        }
    }

    /// True for [`Value::Missing`].
    #[must_use]
    pub const fn is_missing(self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Multiply by a factor; `None` factors poison the result.
    #[must_use]
    pub fn scale(self, factor: Option<f64>) -> Self {
        match (self, factor) {
            (Self::Known(v), Some(f)) => Self::from_f64(v * f),
            _ => Self::Missing,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::from_f64(v)
    }
}

/// Dense annual series: one [`Value`] per year from `start_year` onwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    start_year: i32,
    values: Vec<Value>,
}

impl Series {
    /// Create a series starting at `start_year`.
    #[must_use]
    pub const fn new(start_year: i32, values: Vec<Value>) -> Self {
        Self { start_year, values }
    }

    /// First year covered.
    #[must_use]
    pub const fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Last year covered; equals `start_year - 1` for an empty series.
    #[must_use]
    pub fn stop_year(&self) -> i32 {
        let len = i32::try_from(self.values.len()).unwrap_or(i32::MAX);
        self.start_year.saturating_add(len) - 1
    }

    /// Number of years covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no years are covered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All values in year order.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Value for `year`, or `None` outside `start_year..=stop_year`.
    #[must_use]
    pub fn get(&self, year: i32) -> Option<Value> {
        let offset = year.checked_sub(self.start_year)?;
        let idx = usize::try_from(offset).ok()?;
        self.values.get(idx).copied()
    }

    /// First value, if any.
    #[must_use]
    pub fn first(&self) -> Option<Value> {
        self.values.first().copied()
    }

    /// Last value, if any.
    #[must_use]
    pub fn last(&self) -> Option<Value> {
        self.values.last().copied()
    }

    /// Iterate `(year, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (i32, Value)> + '_ {
        (self.start_year..).zip(self.values.iter().copied())
    }

    /// Elementwise product with a constant factor.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            start_year: self.start_year,
            values: self.values.iter().map(|v| v.scale(Some(factor))).collect(),
        }
    }

    /// Year of the first `Missing` entry, if any.
    #[must_use]
    pub fn first_missing_year(&self) -> Option<i32> {
        self.iter().find(|(_, v)| v.is_missing()).map(|(y, _)| y)
    }

    /// True when every year carries a defined value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(|v| !v.is_missing())
    }
}
