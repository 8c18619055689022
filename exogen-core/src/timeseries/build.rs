//! Compounding per-period growth factors into annual series.

use exogen_types::{Horizon, Series, Value};
use serde::{Deserialize, Serialize};

/// One annual growth factor valid throughout one period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    /// Period index relative to the horizon's start year.
    pub period: i32,
    /// Multiplicative year-on-year factor.
    pub growth: f64,
}

/// Factor for `period`: the first matching row in stable order.
#[must_use]
pub fn growth_at(rows: &[GrowthPoint], period: i32) -> Option<f64> {
    rows.iter().find(|r| r.period == period).map(|r| r.growth)
}

/// Compound `baseline` into a dense annual series over `horizon`.
///
/// `value[start] = baseline` and, for each later year `y`,
/// `value[y] = value[y - 1] * growth(horizon.growth_period_into(y))`.
/// A period with no factor turns that year, and every later one, into
/// [`Value::Missing`].
///
/// The result always holds `stop_year - start_year + 1` values; an inverted
/// horizon yields an empty series.
pub fn build_series<F>(baseline: Value, horizon: &Horizon, mut growth: F) -> Series
where
    F: FnMut(i32) -> Option<f64>,
{
    let mut values: Vec<Value> = Vec::with_capacity(horizon.len());
    if horizon.is_empty() {
        return Series::new(horizon.start_year, values);
    }

    let mut current = baseline;
    values.push(current);
    // The lookup only changes when the period does.
    let mut cached: Option<(i32, Option<f64>)> = None;
    for year in (horizon.start_year + 1)..=horizon.stop_year {
        let period = horizon.growth_period_into(year);
        let factor = match cached {
            Some((p, f)) if p == period => f,
            _ => {
                let f = growth(period);
                cached = Some((period, f));
                f
            }
        };
        current = current.scale(factor);
        values.push(current);
    }
    Series::new(horizon.start_year, values)
}
