use exogen_core::{AdjustmentRow, BaselineRow, GrowthRow};

use super::{iso, region};

/// Baseline GDP per capita.
///
/// - `ZWE` and `USA` are reported by the `low` and `high` models.
/// - `FRA` is reported only by `high`, `other` and `extra` (90/100/110), so
///   the `low` model resolves it through the cross-model median of 100.
/// - `SSP2` carries a single `low` row for `ZWE`.
#[must_use]
pub fn baseline_rows() -> Vec<BaselineRow> {
    [
        ("low", "SSP3", "ZWE", 2010, 1000.0),
        ("high", "SSP3", "ZWE", 2010, 1200.0),
        ("low", "SSP3", "USA", 2010, 50_000.0),
        ("high", "SSP3", "USA", 2010, 52_000.0),
        ("high", "SSP3", "FRA", 2010, 90.0),
        ("other", "SSP3", "FRA", 2010, 100.0),
        ("extra", "SSP3", "FRA", 2010, 110.0),
        // off-year rows never enter the baseline
        ("low", "SSP3", "ZWE", 2015, 9_999.0),
        ("low", "SSP2", "ZWE", 2010, 1100.0),
    ]
    .into_iter()
    .map(|(model, scenario, code, year, value)| BaselineRow {
        model: model.into(),
        scenario: scenario.into(),
        iso: iso(code),
        year,
        value,
    })
    .collect()
}

/// Growth factors every five years from 2010 through 2095.
///
/// `low`/`ZWE` grows 1.05 in the 2010 period, 1.10 in the 2015 period and
/// 1.02 afterwards; `FRA` factors (1.01/1.02/1.03) have a median of 1.02.
#[must_use]
pub fn growth_rows() -> Vec<GrowthRow> {
    let mut rows = Vec::new();
    for year in (2010..=2095).step_by(5) {
        let zwe_low = match year {
            2010 => 1.05,
            2015 => 1.10,
            _ => 1.02,
        };
        let series: [(&str, &str, &str, f64); 8] = [
            ("low", "SSP3", "ZWE", zwe_low),
            ("high", "SSP3", "ZWE", 1.06),
            ("low", "SSP3", "USA", 1.02),
            ("high", "SSP3", "USA", 1.03),
            ("high", "SSP3", "FRA", 1.01),
            ("other", "SSP3", "FRA", 1.02),
            ("extra", "SSP3", "FRA", 1.03),
            ("low", "SSP2", "ZWE", 1.04),
        ];
        rows.extend(
            series
                .into_iter()
                .map(|(model, scenario, code, growth)| GrowthRow {
                    model: model.into(),
                    scenario: scenario.into(),
                    iso: iso(code),
                    year,
                    growth,
                }),
        );
    }
    rows
}

/// Nightlight ratios covering each adjustment branch.
///
/// `ZWE.1.1` has a regular ratio, `ZWE.1.2` a null one, `ZWE.1.3` a zero
/// and `ZWE.1.4` a NaN. `ZWE.1.5` has no row at all.
#[must_use]
pub fn adjustment_rows() -> Vec<AdjustmentRow> {
    [
        ("ZWE.1.1", Some(0.5)),
        ("ZWE.1.2", None),
        ("ZWE.1.3", Some(0.0)),
        ("ZWE.1.4", Some(f64::NAN)),
        ("USA.5.221", Some(1.2)),
        // later duplicates are ignored
        ("ZWE.1.1", Some(3.0)),
    ]
    .into_iter()
    .map(|(id, gdppc_ratio)| AdjustmentRow {
        hierid: region(id),
        gdppc_ratio,
    })
    .collect()
}

/// The baseline table as a JSON record array.
pub const BASELINE_JSON: &str = r#"[
    {"model": "low", "scenario": "SSP3", "iso": "ZWE", "year": 2010, "value": 1000.0},
    {"model": "high", "scenario": "SSP3", "iso": "ZWE", "year": 2010, "value": 1200.0},
    {"model": "low", "scenario": "SSP3", "iso": "USA", "year": 2010, "value": 50000.0}
]"#;

/// A growth table as a JSON record array, matching [`BASELINE_JSON`].
pub const GROWTH_JSON: &str = r#"[
    {"model": "low", "scenario": "SSP3", "iso": "ZWE", "year": 2010, "growth": 1.05},
    {"model": "low", "scenario": "SSP3", "iso": "ZWE", "year": 2015, "growth": 1.10},
    {"model": "low", "scenario": "SSP3", "iso": "USA", "year": 2010, "growth": 1.02},
    {"model": "low", "scenario": "SSP3", "iso": "USA", "year": 2015, "growth": 1.02}
]"#;

/// Adjustment ratios as a JSON record array; `null` marks an undefined ratio.
pub const ADJUSTMENT_JSON: &str = r#"[
    {"hierid": "ZWE.1.1", "gdppc_ratio": 0.5},
    {"hierid": "ZWE.1.2", "gdppc_ratio": null}
]"#;
