use exogen_core::{RegionPopulationRow, ScenarioPopulationRow};

use super::{iso, region};

/// Downscaled regional population snapshots.
///
/// The first rows are for 2010; `ZWE.1.2` has an unknown count. A 2015
/// snapshot for `ZWE.1.1` exists for alternative baseline years.
#[must_use]
pub fn region_rows() -> Vec<RegionPopulationRow> {
    [
        ("ZWE.1.1", 2010, Some(1000.0)),
        ("ZWE.1.2", 2010, None),
        ("USA.5.221", 2010, Some(5000.0)),
        ("FRA", 2010, Some(64_000_000.0)),
        ("ZWE.1.1", 2015, Some(1200.0)),
    ]
    .into_iter()
    .map(|(id, year, pop)| RegionPopulationRow {
        hierid: region(id),
        year,
        pop,
    })
    .collect()
}

/// Country projections every five years from 2010 through 2100.
///
/// Under `SSP2`, `ZWE` grows 10% per period, `USA` is flat, and `FRA` has no
/// 2010 row (so its ratio defaults to 1). `SSP3` only covers `ZWE`.
#[must_use]
pub fn ssp_rows() -> Vec<ScenarioPopulationRow> {
    let mut rows = Vec::new();
    let mut zwe = 10.0_f64;
    for year in (2010..=2100).step_by(5) {
        rows.push(row("ZWE", year, "SSP2", zwe));
        rows.push(row("USA", year, "SSP2", 300.0));
        if year > 2010 {
            rows.push(row("FRA", year, "SSP2", 65.0));
        }
        rows.push(row("ZWE", year, "SSP3", 12.0));
        zwe *= 1.1;
    }
    rows
}

fn row(code: &str, year: i32, ssp: &str, population: f64) -> ScenarioPopulationRow {
    ScenarioPopulationRow {
        iso: iso(code),
        year,
        ssp: ssp.into(),
        population,
    }
}
