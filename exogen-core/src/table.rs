//! Typed rows of the reference tables consumed by providers.
//!
//! Column names follow the reference CSV exports (`model`, `scenario`,
//! `iso`, `year`, ...). Rows are plain data: filtering and partitioning into
//! tiers happens once, inside each provider's constructor.

use exogen_types::{ExogenError, IsoCode, RegionId};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Baseline GDP per capita reported by one model for one country and year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineRow {
    /// Reporting model (e.g. "low", "high").
    pub model: String,
    /// Scenario (e.g. "SSP3").
    pub scenario: String,
    /// Country the value applies to.
    pub iso: IsoCode,
    /// Calendar year of the observation.
    pub year: i32,
    /// GDP per capita.
    pub value: f64,
}

/// Annual growth factor projected by one model for one country, valid for
/// the period starting at `year`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRow {
    /// Reporting model.
    pub model: String,
    /// Scenario.
    pub scenario: String,
    /// Country the factor applies to.
    pub iso: IsoCode,
    /// First calendar year of the period.
    pub year: i32,
    /// Multiplicative year-on-year factor.
    pub growth: f64,
}

/// Ratio of a region's GDP per capita to its country's, from nightlights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentRow {
    /// Region the ratio applies to.
    pub hierid: RegionId,
    /// Ratio; `None` (JSON `null`) or NaN means undefined.
    pub gdppc_ratio: Option<f64>,
}

/// Downscaled population of one region in one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionPopulationRow {
    /// Region the count applies to.
    pub hierid: RegionId,
    /// Calendar year of the snapshot.
    pub year: i32,
    /// Population; `None` when unknown.
    pub pop: Option<f64>,
}

/// Country population projected under one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPopulationRow {
    /// Country the projection applies to.
    #[serde(alias = "ISO")]
    pub iso: IsoCode,
    /// Calendar year of the projection.
    pub year: i32,
    /// Scenario (e.g. "SSP2").
    pub ssp: String,
    /// Projected population.
    pub population: f64,
}

/// Parse a JSON array of records into typed rows.
///
/// Unknown columns are ignored. Missing required columns, wrongly typed
/// cells, and invalid keys fail the whole table.
///
/// # Errors
/// Returns `ExogenError::Table` naming `table` when the records cannot be
/// deserialized.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "exogen::core::records_from_json", skip(json), fields(bytes = json.len()))
)]
pub fn records_from_json<T>(table: &str, json: &str) -> Result<Vec<T>, ExogenError>
where
    T: DeserializeOwned,
{
    let rows: Vec<T> =
        serde_json::from_str(json).map_err(|e| ExogenError::table(table, e.to_string()))?;
    #[cfg(feature = "tracing")]
    tracing::debug!(rows = rows.len(), "loaded table");
    Ok(rows)
}
