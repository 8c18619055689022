//! Re-export of foundational types from `exogen-types`.
// Consolidated re-exports so downstream crates can depend on `exogen-core` only

pub use exogen_types::{Adjustment, SeriesAttribution, Tier};
pub use exogen_types::{BatchReport, ExogenError};
pub use exogen_types::{CacheConfig, DemographicConfig, EconomicConfig, Horizon};
pub use exogen_types::{IsoCode, RegionId, Series, Value};
