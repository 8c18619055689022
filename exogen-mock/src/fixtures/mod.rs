//! Deterministic reference tables for tests and examples.

use exogen_core::{IsoCode, RegionId};

/// GDP-per-capita baseline, growth, and adjustment tables.
pub mod gdppc;
/// Regional and scenario population tables.
pub mod population;

fn iso(code: &str) -> IsoCode {
    IsoCode::new(code).expect("fixture iso codes are valid")
}

fn region(id: &str) -> RegionId {
    RegionId::new(id).expect("fixture region ids are valid")
}
