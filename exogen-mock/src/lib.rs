//! exogen-mock
//!
//! A deterministic [`SpaceProvider`] and reference-table fixtures for
//! CI-safe tests and examples.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use exogen_core::{ExogenError, Horizon, RegionId, Series, SpaceProvider, Value};

pub mod fixtures;

/// Mock provider producing a synthetic series per region.
///
/// Every region starts at `100 + (sum of id bytes % 100)` and grows 1% per
/// year. Two country prefixes trigger special behavior:
/// - `ERR`: the call fails with [`ExogenError::Other`];
/// - `SLO`: the call sleeps 200ms before answering.
///
/// Each derivation is counted, so wrappers can assert how often they reach
/// the provider.
pub struct MockProvider {
    horizon: Horizon,
    calls: AtomicUsize,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(Horizon::new(2010, 2020))
    }
}

impl MockProvider {
    /// Mock over `horizon`.
    #[must_use]
    pub const fn new(horizon: Horizon) -> Self {
        Self {
            horizon,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `timeseries` calls received so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// First value of the synthetic series for `region`.
    #[must_use]
    pub fn baseline_for(region: &RegionId) -> f64 {
        let sum: u32 = region.as_str().bytes().map(u32::from).sum();
        100.0 + f64::from(sum % 100)
    }

    fn maybe_fail_or_sleep(region: &RegionId) -> Result<(), ExogenError> {
        match region.iso().as_str() {
            "ERR" => Err(ExogenError::Other(format!("forced failure: {region}"))),
            "SLO" => {
                std::thread::sleep(Duration::from_millis(200));
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl SpaceProvider for MockProvider {
    fn name(&self) -> &'static str {
        "exogen-mock"
    }

    fn scenario(&self) -> &str {
        "mock"
    }

    fn horizon(&self) -> Horizon {
        self.horizon
    }

    fn timeseries(&self, region: &RegionId) -> Result<Arc<Series>, ExogenError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Self::maybe_fail_or_sleep(region)?;
        let mut v = Self::baseline_for(region);
        let values = (self.horizon.start_year..=self.horizon.stop_year)
            .map(|_| {
                let out = Value::Known(v);
                v *= 1.01;
                out
            })
            .collect();
        Ok(Arc::new(Series::new(self.horizon.start_year, values)))
    }
}
