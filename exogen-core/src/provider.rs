use std::sync::Arc;

use exogen_types::{ExogenError, Horizon, RegionId, Series, Value};

/// Role trait for anything that derives a full annual series per region.
///
/// Implementations are expected to be pure functions of the region given
/// their construction-time inputs, and to memoize results so repeat calls
/// are cheap. Returning `Arc<Series>` lets callers and caches share one
/// allocation per region.
pub trait SpaceProvider: Send + Sync {
    /// Stable provider name, used in logs and reports.
    fn name(&self) -> &'static str;

    /// Active scenario identifier.
    fn scenario(&self) -> &str;

    /// Horizon every returned series spans.
    fn horizon(&self) -> Horizon;

    /// First year of every returned series.
    fn start_year(&self) -> i32 {
        self.horizon().start_year
    }

    /// Last year of every returned series.
    fn stop_year(&self) -> i32 {
        self.horizon().stop_year
    }

    /// Derive (or return the memoized) annual series for `region`.
    ///
    /// # Errors
    /// Implementations fail only for caller-side problems; missing reference
    /// data is reported inside the series as [`Value::Missing`].
    fn timeseries(&self, region: &RegionId) -> Result<Arc<Series>, ExogenError>;
}

/// Role trait for point-in-time lookups keyed by region and year.
pub trait SpaceTimeProvider: Send + Sync {
    /// First year answered without clamping.
    fn first_year(&self) -> i32;

    /// Value for `region` in `year`.
    ///
    /// # Errors
    /// Returns `OutOfRange` for years the implementation refuses to answer,
    /// or any error raised while deriving the region's series.
    fn value(&self, region: &RegionId, year: i32) -> Result<Value, ExogenError>;
}
