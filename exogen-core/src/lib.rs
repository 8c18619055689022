//! exogen-core
//!
//! Core types, traits, and utilities shared across the exogen workspace.
//!
//! - `types`: keys, values, configuration, and errors re-exported from `exogen-types`.
//! - `provider`: the `SpaceProvider` and `SpaceTimeProvider` traits.
//! - `table`: typed rows of the reference tables and JSON record loading.
//! - `timeseries`: tiered fallback resolution, growth compounding, and median
//!   aggregation.
//!
//! Everything here is synchronous and free of I/O; providers built on top are
//! `Send + Sync` and can be shared across threads.
#![warn(missing_docs)]

/// Provider role traits.
pub mod provider;
/// Reference table rows.
pub mod table;
/// Time-series utilities for resolution, compounding, and aggregation.
pub mod timeseries;
pub mod types;

pub use provider::{SpaceProvider, SpaceTimeProvider};
pub use table::{
    AdjustmentRow, BaselineRow, GrowthRow, RegionPopulationRow, ScenarioPopulationRow,
    records_from_json,
};
pub use timeseries::aggregate::{median, median_by_key};
pub use timeseries::build::{GrowthPoint, build_series, growth_at};
pub use timeseries::resolve::{KeyIndex, Resolved, TierSet, resolve};
pub use types::*;
