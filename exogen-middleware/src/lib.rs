//! exogen-middleware
//!
//! Memoization and caching wrappers for exogen providers.
//!
//! - [`Memo`]: compute-at-most-once table keyed by anything hashable.
//! - [`SpaceTimeCache`]: `(region, year)` lookups over a [`SpaceProvider`]
//!   that derive each region's series once and index into it afterwards.
//!
//! [`SpaceProvider`]: exogen_core::SpaceProvider

mod cache;
mod memo;

pub use crate::cache::SpaceTimeCache;
pub use crate::memo::Memo;
