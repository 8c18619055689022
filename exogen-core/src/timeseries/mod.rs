//! Time-series utilities shared by providers.
//!
//! Modules include:
//! - `resolve`: pick the most specific non-empty tier for a key
//! - `build`: compound per-period growth factors into an annual series
//! - `aggregate`: median collapse used to build the cross-model tiers
/// Median aggregation helpers.
pub mod aggregate;
/// Growth compounding.
pub mod build;
/// Tiered fallback resolution.
pub mod resolve;
