//! Exogen-specific keys, values, configuration, and reports.
#![warn(missing_docs)]

mod attribution;
mod config;
mod error;
mod key;
mod reports;
mod value;

pub use attribution::{Adjustment, SeriesAttribution, Tier};
pub use config::{CacheConfig, DemographicConfig, EconomicConfig, Horizon};
pub use error::ExogenError;
pub use key::{IsoCode, RegionId};
pub use reports::BatchReport;
pub use value::{Series, Value};
