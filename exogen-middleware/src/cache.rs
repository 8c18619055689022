use std::sync::Arc;

use exogen_core::{
    CacheConfig, ExogenError, Horizon, RegionId, Series, SpaceProvider, SpaceTimeProvider, Value,
};

use crate::memo::Memo;

/// Point-in-time lookups over a [`SpaceProvider`], memoizing whole series.
///
/// The first query for a region derives its full series through the wrapped
/// provider; later queries for any year of that region index into the stored
/// series. Concurrent first queries for one region share a single derivation.
///
/// Years before the provider's first year are clamped to the first value.
/// Years after the last year fail with [`ExogenError::OutOfRange`] unless
/// [`CacheConfig::clamp_above_range`] is set.
pub struct SpaceTimeCache {
    inner: Arc<dyn SpaceProvider>,
    series: Memo<RegionId, Arc<Series>>,
    cfg: CacheConfig,
}

impl SpaceTimeCache {
    /// Wrap `inner` with an unbounded cache and default range handling.
    #[must_use]
    pub fn new(inner: Arc<dyn SpaceProvider>) -> Self {
        Self::with_config(inner, &CacheConfig::default())
    }

    /// Wrap `inner` using the given cache configuration.
    #[must_use]
    pub fn with_config(inner: Arc<dyn SpaceProvider>, cfg: &CacheConfig) -> Self {
        Self {
            inner,
            series: Memo::with_capacity(cfg.max_capacity),
            cfg: *cfg,
        }
    }

    /// The wrapped provider.
    #[must_use]
    pub fn inner(&self) -> &Arc<dyn SpaceProvider> {
        &self.inner
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &CacheConfig {
        &self.cfg
    }

    /// First year of the wrapped provider's series.
    #[must_use]
    pub fn start_year(&self) -> i32 {
        self.inner.start_year()
    }

    /// True once `region`'s series has been derived and is still held.
    #[must_use]
    pub fn is_cached(&self, region: &RegionId) -> bool {
        self.series.contains(region)
    }

    /// Number of regions currently held.
    #[must_use]
    pub fn cached_regions(&self) -> u64 {
        self.series.len()
    }

    /// Full series for `region`, derived on first access.
    ///
    /// # Errors
    /// Propagates the wrapped provider's error. Failures are not cached.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "exogen::middleware::cache::timeseries",
            skip(self),
            fields(provider = self.inner.name()),
        )
    )]
    pub fn timeseries(&self, region: &RegionId) -> Result<Arc<Series>, ExogenError> {
        self.series.try_get_or_insert_with(region.clone(), || {
            #[cfg(feature = "tracing")]
            tracing::debug!(region = %region, "space-time cache miss");
            self.inner.timeseries(region)
        })
    }

    /// Value for `region` in `year`.
    ///
    /// # Errors
    /// Returns `OutOfRange` for years after the series' last year (unless
    /// clamping is enabled), or the wrapped provider's error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "exogen::middleware::cache::value",
            skip(self),
            fields(provider = self.inner.name()),
        )
    )]
    pub fn value(&self, region: &RegionId, year: i32) -> Result<Value, ExogenError> {
        let series = self.timeseries(region)?;
        let out_of_range = || ExogenError::OutOfRange {
            year,
            start_year: series.start_year(),
            stop_year: series.stop_year(),
        };

        if year < series.start_year() {
            return series.first().ok_or_else(out_of_range);
        }
        if let Some(v) = series.get(year) {
            return Ok(v);
        }
        if self.cfg.clamp_above_range {
            return series.last().ok_or_else(out_of_range);
        }
        #[cfg(feature = "tracing")]
        tracing::warn!(region = %region, year, "year after end of series");
        Err(out_of_range())
    }
}

impl SpaceTimeProvider for SpaceTimeCache {
    fn first_year(&self) -> i32 {
        self.start_year()
    }

    fn value(&self, region: &RegionId, year: i32) -> Result<Value, ExogenError> {
        Self::value(self, region, year)
    }
}

impl SpaceProvider for SpaceTimeCache {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn scenario(&self) -> &str {
        self.inner.scenario()
    }

    fn horizon(&self) -> Horizon {
        self.inner.horizon()
    }

    fn timeseries(&self, region: &RegionId) -> Result<Arc<Series>, ExogenError> {
        Self::timeseries(self, region)
    }
}
