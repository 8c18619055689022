//! exogen derives annual socioeconomic series per region from coarse
//! reference tables, lazily and at most once per region.
//!
//! Overview
//! - [`EconomicProvider`]: GDP per capita. Country series compound a baseline
//!   with per-period growth, then scale by a sub-national nightlight ratio.
//! - [`DemographicProvider`]: population. Regional snapshots grow with their
//!   country's projected population.
//! - [`SpaceTimeCache`]: `(region, year)` lookups over any provider.
//! - [`BatchBuilder`]: derive many regions concurrently on a Tokio runtime.
//!
//! Key behaviors and trade-offs
//! - Fallback: every input is resolved through the active model's rows, then
//!   the cross-model median for the same country, then a global median. Gaps
//!   in the reference tables are filled rather than failing, and
//!   [`SeriesAttribution`] records which tier was used.
//! - Missing data: a year with no usable growth factor turns into
//!   [`Value::Missing`] for the rest of the series instead of NaN.
//! - Memoization: every series is computed once per provider and shared as an
//!   `Arc<Series>`; nothing is ever invalidated.
//! - Range: cache lookups before the first year clamp to the first value;
//!   lookups after the last year fail with `OutOfRange` unless clamping is
//!   enabled in [`CacheConfig`].
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use exogen::{EconomicProvider, Horizon, SpaceTimeCache};
//!
//! let gdppc = EconomicProvider::builder()
//!     .model("low")
//!     .scenario("SSP3")
//!     .horizon(Horizon::new(2010, 2100))
//!     .baseline_rows(baseline)
//!     .growth_rows(growth)
//!     .adjustment_rows(nightlights)
//!     .build()?;
//!
//! let cache = SpaceTimeCache::new(Arc::new(gdppc));
//! let v = cache.value(&"ZWE.1.1".parse()?, 2050)?;
//! ```
#![warn(missing_docs)]

mod batch;
mod demographic;
mod economic;

pub use batch::BatchBuilder;
pub use demographic::{DemographicBuilder, DemographicProvider};
pub use economic::{DEGENERATE_ADJUSTMENT, EconomicBuilder, EconomicProvider};

pub use exogen_core::{SpaceProvider, SpaceTimeProvider, records_from_json};
pub use exogen_core::{
    AdjustmentRow, BaselineRow, GrowthRow, RegionPopulationRow, ScenarioPopulationRow,
};
pub use exogen_middleware::SpaceTimeCache;
pub use exogen_types::{
    Adjustment, BatchReport, CacheConfig, DemographicConfig, EconomicConfig, ExogenError, Horizon,
    IsoCode, RegionId, Series, SeriesAttribution, Tier, Value,
};
